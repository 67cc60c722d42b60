// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tiksaver::app::config::{self, Config, GeneralConfig};
use tiksaver::app::persisted_state::{LocalStorage, THEME_KEY};
use tiksaver::download::{DownloadFlow, DownloadOption, Effect, FlowState, SimulatedDownload};
use tiksaver::i18n::fluent::I18n;
use tiksaver::ui::modal::{ClickTarget, Message as ModalMessage, ModalHost, ModalVariant};
use tiksaver::ui::notifications::{Manager, Notification, Severity};
use tiksaver::ui::theming::{self, ThemePreference};

fn notifications(effects: &[Effect]) -> Vec<&Notification> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification),
            Effect::ScheduleCompletion(_) => None,
        })
        .collect()
}

#[test]
fn valid_url_produces_processing_then_ready() {
    let mut flow = DownloadFlow::new(Duration::from_millis(10), SimulatedDownload);

    let first = flow.submit("https://www.tiktok.com/@someone/video/7234567890123456789");
    let first_notes = notifications(&first);
    assert_eq!(first_notes.len(), 1);
    assert_eq!(first_notes[0].severity(), Severity::Info);
    assert!(first
        .iter()
        .any(|effect| matches!(effect, Effect::ScheduleCompletion(d) if *d == Duration::from_millis(10))));
    assert!(flow.is_processing());

    let second = flow.complete();
    let second_notes = notifications(&second);
    assert_eq!(second_notes.len(), 1);
    assert_eq!(second_notes[0].severity(), Severity::Success);
    assert_ne!(first_notes[0].key(), second_notes[0].key());
    assert_eq!(flow.state(), &FlowState::Idle);
}

#[test]
fn missing_and_invalid_urls_produce_distinct_errors() {
    let mut flow = DownloadFlow::default();

    let missing = flow.submit("   ");
    let invalid = flow.submit("https://example.com/watch?v=1");

    let missing = notifications(&missing);
    let invalid = notifications(&invalid);
    assert_eq!(missing.len(), 1);
    assert_eq!(invalid.len(), 1);
    assert_eq!(missing[0].severity(), Severity::Error);
    assert_eq!(invalid[0].severity(), Severity::Error);
    assert_ne!(missing[0].key(), invalid[0].key());
    assert_eq!(flow.state(), &FlowState::Idle);
}

#[test]
fn every_notification_key_is_translated() {
    let i18n = I18n::default();
    let mut flow = DownloadFlow::default();

    let mut keys: Vec<String> = Vec::new();
    for input in ["", "not a link", "https://tiktok.com/@user/video/1"] {
        for note in notifications(&flow.submit(input)) {
            keys.push(note.key().to_string());
        }
    }
    for note in notifications(&flow.complete()) {
        keys.push(note.key().to_string());
    }
    for option in DownloadOption::ALL {
        keys.push(option.dispatch().notification.key().to_string());
    }

    for key in keys {
        assert_ne!(i18n.tr(&key), format!("MISSING: {key}"), "untranslated {key}");
    }
}

#[test]
fn theme_toggle_round_trips_through_storage() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut storage, warning) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let original = ThemePreference::load(&storage);
    let original_glyph = original.glyph();

    let mut preference = original;
    assert!(theming::toggle(&mut preference, &mut storage).is_none());
    assert_ne!(preference, original);
    assert_ne!(preference.glyph(), original_glyph);

    // A fresh load sees the persisted value.
    let (reloaded, _) = LocalStorage::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(reloaded.get(THEME_KEY), Some(preference.as_str()));
    assert_eq!(ThemePreference::load(&reloaded), preference);

    assert!(theming::toggle(&mut preference, &mut storage).is_none());
    assert_eq!(preference, original);
    assert_eq!(preference.glyph(), original_glyph);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn modal_closes_on_backdrop_but_not_panel() {
    let mut host = ModalHost::new();
    let action = DownloadOption::Ringtone.dispatch();
    let variant = action.modal.expect("ringtone opens a dialog");
    host.open(variant);

    host.update(ModalMessage::Clicked(ClickTarget::Panel));
    assert!(host.is_open());

    host.update(ModalMessage::Clicked(ClickTarget::Backdrop));
    assert!(!host.is_open());

    host.open(ModalVariant::Bulk);
    host.update(ModalMessage::CloseRequested);
    assert!(!host.is_open());
}

#[test]
fn ringtone_sliders_keep_start_before_end() {
    let mut host = ModalHost::new();
    host.open(ModalVariant::Ringtone);

    for (start, end) in [(10, 5), (29, 3), (0, 0), (30, 30), (15, 16)] {
        host.update(ModalMessage::StartChanged(start));
        host.update(ModalMessage::EndChanged(end));

        let Some(tiksaver::ui::modal::Modal::Ringtone { range, .. }) = host.current() else {
            panic!("ringtone dialog should stay open");
        };
        assert!(range.start() < range.end());
        assert!(range.end() <= 30);
    }
}

#[test]
fn newest_notification_replaces_previous() {
    let start = Instant::now();
    let mut manager = Manager::new();

    manager.push(Notification::info("notification-processing").issued_at(start));
    manager.push(Notification::success("notification-ready").issued_at(start));

    assert_eq!(manager.visible_count(), 1);
    assert_eq!(
        manager.current().map(Notification::key),
        Some("notification-ready")
    );

    manager.tick_at(start + manager.timing().lifetime() + Duration::from_millis(1));
    assert!(!manager.has_notifications());
}

#[test]
fn config_round_trips_and_selects_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("hi".to_string()),
        },
        ..Config::default()
    };
    let content = toml::to_string_pretty(&config).expect("Failed to serialize config");
    std::fs::write(&path, content).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.language.as_deref(), Some("hi"));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "hi");

    let overridden = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(overridden.current_locale().to_string(), "en-US");
}
