mod common;

use common::TestApp;
use crossterm::event::{KeyCode, KeyModifiers};
use foodsplit::config::Config;
use foodsplit::keymap::{Action, KeyBinding, KeymapPreset};
use foodsplit::Route;
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+s", Action::Confirm));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f2", Action::FollowLink));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('s'), KeyModifiers::CONTROL),
        Some(Action::Confirm)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(2), KeyModifiers::NONE),
        Some(Action::FollowLink)
    );

    // Enter was the preset Confirm binding and is shadowed
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
        None
    );

    // Emacs bindings not overridden still work
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('f'), KeyModifiers::CONTROL),
        Some(Action::MoveRight)
    );
}

#[test]
fn test_keymap_from_hand_written_toml() {
    let toml = r#"
submit_delay_ms = 20

[keymap]
preset = "standard"

[[keymap.overrides]]
key = "ctrl+l"
action = "log_out"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('l'), KeyModifiers::CONTROL),
        Some(Action::LogOut)
    );
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('l'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_overrides_drive_the_app() {
    let mut config = Config {
        submit_delay_ms: 20,
        ..Config::default()
    };
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f2", Action::FollowLink));

    let mut t = TestApp::with_config(config);
    // The preset link key is shadowed
    t.press_with(KeyCode::Char('o'), KeyModifiers::CONTROL);
    assert_eq!(t.app.current_route(), Route::Login);

    t.press(KeyCode::F(2));
    assert_eq!(t.app.current_route(), Route::SignUp);
    assert!(t.screen_text().contains("F2: Log in"));
}
