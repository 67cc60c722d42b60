// SPDX-License-Identifier: MPL-2.0
//! Quick-action options shown below the URL field.

use crate::ui::modal::ModalVariant;
use crate::ui::notifications::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOption {
    Mp4,
    Mp3,
    Bulk,
    Profile,
    Ringtone,
}

/// What selecting an option does: always a toast, sometimes a dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionAction {
    pub notification: Notification,
    pub modal: Option<ModalVariant>,
}

impl DownloadOption {
    pub const ALL: [DownloadOption; 5] = [
        DownloadOption::Mp4,
        DownloadOption::Mp3,
        DownloadOption::Bulk,
        DownloadOption::Profile,
        DownloadOption::Ringtone,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            DownloadOption::Mp4 => "option-mp4",
            DownloadOption::Mp3 => "option-mp3",
            DownloadOption::Bulk => "option-bulk",
            DownloadOption::Profile => "option-profile",
            DownloadOption::Ringtone => "option-ringtone",
        }
    }

    fn notification_key(self) -> &'static str {
        match self {
            DownloadOption::Mp4 => "notification-option-mp4",
            DownloadOption::Mp3 => "notification-option-mp3",
            DownloadOption::Bulk => "notification-option-bulk",
            DownloadOption::Profile => "notification-option-profile",
            DownloadOption::Ringtone => "notification-option-ringtone",
        }
    }

    /// Dialog opened by this option, if any.
    #[must_use]
    pub fn modal(self) -> Option<ModalVariant> {
        match self {
            DownloadOption::Mp4 | DownloadOption::Mp3 => None,
            DownloadOption::Bulk => Some(ModalVariant::Bulk),
            DownloadOption::Profile => Some(ModalVariant::Profile),
            DownloadOption::Ringtone => Some(ModalVariant::Ringtone),
        }
    }

    #[must_use]
    pub fn dispatch(self) -> OptionAction {
        OptionAction {
            notification: Notification::info(self.notification_key()),
            modal: self.modal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn format_options_only_notify() {
        for option in [DownloadOption::Mp4, DownloadOption::Mp3] {
            let action = option.dispatch();
            assert_eq!(action.notification.severity(), Severity::Info);
            assert!(action.modal.is_none());
        }
    }

    #[test]
    fn dialog_options_notify_and_open_modal() {
        assert_eq!(DownloadOption::Bulk.dispatch().modal, Some(ModalVariant::Bulk));
        assert_eq!(
            DownloadOption::Profile.dispatch().modal,
            Some(ModalVariant::Profile)
        );
        assert_eq!(
            DownloadOption::Ringtone.dispatch().modal,
            Some(ModalVariant::Ringtone)
        );
    }

    #[test]
    fn every_option_has_its_own_message() {
        let keys: Vec<String> = DownloadOption::ALL
            .iter()
            .map(|option| option.dispatch().notification.key().to_string())
            .collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }
}
