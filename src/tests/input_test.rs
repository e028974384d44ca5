use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::cli::input::{map_key, Action};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ============================================================================
// KEY MAPPING
// ============================================================================

#[test]
fn test_quit_keys() {
    assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
}

#[test]
fn test_plain_c_is_unmapped() {
    assert_eq!(map_key(press(KeyCode::Char('c'))), None);
}

#[test]
fn test_refresh_and_help() {
    assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Action::Refresh));
    assert_eq!(map_key(press(KeyCode::Char('?'))), Some(Action::ToggleHelp));
}

#[test]
fn test_focus_keys() {
    assert_eq!(map_key(press(KeyCode::Tab)), Some(Action::NextFocus));
    assert_eq!(map_key(press(KeyCode::Down)), Some(Action::NextFocus));
    assert_eq!(map_key(press(KeyCode::BackTab)), Some(Action::PrevFocus));
    assert_eq!(map_key(press(KeyCode::Up)), Some(Action::PrevFocus));
}

#[test]
fn test_cursor_keys() {
    assert_eq!(map_key(press(KeyCode::Left)), Some(Action::Left));
    assert_eq!(map_key(press(KeyCode::Char('h'))), Some(Action::Left));
    assert_eq!(map_key(press(KeyCode::Right)), Some(Action::Right));
    assert_eq!(map_key(press(KeyCode::Char('l'))), Some(Action::Right));
}

#[test]
fn test_release_and_repeat_are_ignored() {
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Char('r'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );
    assert_eq!(map_key(release), None);

    let repeat = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(map_key(repeat), None);
}

#[test]
fn test_unbound_key() {
    assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    assert_eq!(map_key(press(KeyCode::Enter)), None);
}
