//! Key handling for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveTab, App};

/// Apply a key event to the application state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals report both press and release
    if key.kind == KeyEventKind::Release {
        return;
    }

    // The breakdown overlay swallows everything except its close keys
    if app.show_breakdown {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q')) {
            app.show_breakdown = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.active_tab = app.active_tab.next(),
        KeyCode::BackTab => app.active_tab = app.active_tab.prev(),
        KeyCode::Char('1') => app.active_tab = ActiveTab::Travel,
        KeyCode::Char('2') => app.active_tab = ActiveTab::TeamBuilding,
        KeyCode::Char('3') => app.active_tab = ActiveTab::Combined,
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current(),
        KeyCode::Char('a') => app.toggle_select_all(),
        KeyCode::Char('b') => app.show_breakdown = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_tables;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_key() {
        let (travel, team) = load_tables().unwrap();
        let mut app = App::new(&travel, &team);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let (travel, team) = load_tables().unwrap();
        let mut app = App::new(&travel, &team);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_tab, ActiveTab::TeamBuilding);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_tab, ActiveTab::Combined);
    }

    #[test]
    fn test_breakdown_overlay_swallows_keys() {
        let (travel, team) = load_tables().unwrap();
        let mut app = App::new(&travel, &team);
        handle_key(&mut app, press(KeyCode::Char('b')));
        assert!(app.show_breakdown);

        // Tab must not switch views while the overlay is open
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_tab, ActiveTab::Travel);
        assert!(app.show_breakdown);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.show_breakdown);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_space_toggles_selection() {
        let (travel, team) = load_tables().unwrap();
        let mut app = App::new(&travel, &team);
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.select_all);
        assert_eq!(app.selected.len(), 1);
    }
}
