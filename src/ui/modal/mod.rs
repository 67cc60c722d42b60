// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs opened from the quick-action options.
//!
//! [`ModalHost`] owns at most one [`Modal`]. Opening a modal while another is
//! shown replaces it, and every open starts from default field values. A modal
//! closes on its close button or on a click that lands on the backdrop itself;
//! clicks inside the panel never close it.

pub mod ringtone;
mod view;

pub use ringtone::RingtoneRange;
pub use view::view;

use iced::widget::text_editor;
use std::fmt;

/// Which dialog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVariant {
    Bulk,
    Profile,
    Ringtone,
}

impl ModalVariant {
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            ModalVariant::Bulk => "modal-bulk-title",
            ModalVariant::Profile => "modal-profile-title",
            ModalVariant::Ringtone => "modal-ringtone-title",
        }
    }

    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            ModalVariant::Bulk => "modal-bulk-description",
            ModalVariant::Profile => "modal-profile-description",
            ModalVariant::Ringtone => "modal-ringtone-description",
        }
    }

    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            ModalVariant::Bulk => "modal-bulk-placeholder",
            ModalVariant::Profile => "modal-profile-placeholder",
            ModalVariant::Ringtone => "modal-ringtone-placeholder",
        }
    }
}

/// Layer that received a mouse press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel.
    Backdrop,
    /// The panel or any of its descendants.
    Panel,
}

#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
    Clicked(ClickTarget),
    BulkEdited(text_editor::Action),
    UsernameChanged(String),
    RingtoneUrlChanged(String),
    StartChanged(u8),
    EndChanged(u8),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Closed(ModalVariant),
    /// The dialog's action button was pressed. Nothing is downloaded.
    Submitted(ModalVariant),
}

/// An open dialog and its field state.
pub enum Modal {
    Bulk { urls: text_editor::Content },
    Profile { username: String },
    Ringtone { url: String, range: RingtoneRange },
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modal::Bulk { urls } => f
                .debug_struct("Bulk")
                .field("urls", &urls.text())
                .finish(),
            Modal::Profile { username } => f
                .debug_struct("Profile")
                .field("username", username)
                .finish(),
            Modal::Ringtone { url, range } => f
                .debug_struct("Ringtone")
                .field("url", url)
                .field("range", range)
                .finish(),
        }
    }
}

impl Modal {
    /// Creates a dialog with default field values.
    #[must_use]
    pub fn new(variant: ModalVariant) -> Self {
        match variant {
            ModalVariant::Bulk => Modal::Bulk {
                urls: text_editor::Content::new(),
            },
            ModalVariant::Profile => Modal::Profile {
                username: String::new(),
            },
            ModalVariant::Ringtone => Modal::Ringtone {
                url: String::new(),
                range: RingtoneRange::default(),
            },
        }
    }

    #[must_use]
    pub fn variant(&self) -> ModalVariant {
        match self {
            Modal::Bulk { .. } => ModalVariant::Bulk,
            Modal::Profile { .. } => ModalVariant::Profile,
            Modal::Ringtone { .. } => ModalVariant::Ringtone,
        }
    }

    /// Applies a field edit. Edits for another variant's fields are ignored.
    fn apply(&mut self, message: Message) {
        match (self, message) {
            (Modal::Bulk { urls }, Message::BulkEdited(action)) => urls.perform(action),
            (Modal::Profile { username }, Message::UsernameChanged(value)) => *username = value,
            (Modal::Ringtone { url, .. }, Message::RingtoneUrlChanged(value)) => *url = value,
            (Modal::Ringtone { range, .. }, Message::StartChanged(value)) => {
                range.set_start(value);
            }
            (Modal::Ringtone { range, .. }, Message::EndChanged(value)) => range.set_end(value),
            (modal, message) => {
                log::debug!("Ignoring {message:?} for {:?} modal", modal.variant());
            }
        }
    }
}

/// Single-slot owner of the open dialog.
#[derive(Debug, Default)]
pub struct ModalHost {
    current: Option<Modal>,
}

impl ModalHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `variant` with fresh state, replacing any open dialog.
    pub fn open(&mut self, variant: ModalVariant) {
        if let Some(previous) = self.current.replace(Modal::new(variant)) {
            log::info!(
                "Replacing {:?} modal with {variant:?}",
                previous.variant()
            );
        } else {
            log::info!("Opened {variant:?} modal");
        }
    }

    /// Closes the open dialog, returning its variant.
    pub fn close(&mut self) -> Option<ModalVariant> {
        let variant = self.current.take().map(|modal| modal.variant())?;
        log::info!("Closed {variant:?} modal");
        Some(variant)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Modal> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Process a modal message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        let Some(modal) = self.current.as_mut() else {
            return Event::None;
        };

        match message {
            Message::CloseRequested | Message::Clicked(ClickTarget::Backdrop) => {
                self.close().map_or(Event::None, Event::Closed)
            }
            Message::Clicked(ClickTarget::Panel) => Event::None,
            Message::Submit => {
                let variant = modal.variant();
                log::info!("{variant:?} modal submitted: {modal:?}");
                Event::Submitted(variant)
            }
            edit => {
                modal.apply(edit);
                Event::None
            }
        }
    }
}
