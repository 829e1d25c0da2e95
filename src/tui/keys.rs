//! Keyboard event to action mapping.
//!
//! Search mode captures printable characters; outside it, arrow and vi keys
//! drive map navigation.

use crossterm::event::{KeyCode, KeyEvent};

use super::action::Action;
use super::state::{Direction, ViewState};

/// Convert a key event into an action, given the current view state.
pub fn key_to_action(key: KeyEvent, view: &ViewState) -> Option<Action> {
    if view.search_active {
        return match key.code {
            KeyCode::Esc => Some(Action::SearchCancel),
            KeyCode::Enter => Some(Action::SearchCommit),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('s') => Some(Action::ToggleStandings),
        KeyCode::Char('[') => Some(Action::PrevDate),
        KeyCode::Char(']') => Some(Action::NextDate),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Esc => Some(Action::CloseDetail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_and_vi_keys_map_to_moves() {
        let view = ViewState::new();
        assert_eq!(key_to_action(key(KeyCode::Up), &view), Some(Action::Move(Direction::Up)));
        assert_eq!(
            key_to_action(key(KeyCode::Char('k')), &view),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('h')), &view),
            Some(Action::Move(Direction::Left))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Right), &view),
            Some(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_quit_and_refresh() {
        let view = ViewState::new();
        assert_eq!(key_to_action(key(KeyCode::Char('q')), &view), Some(Action::Quit));
        assert_eq!(key_to_action(key(KeyCode::Char('r')), &view), Some(Action::Refresh));
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let mut view = ViewState::new();
        // Outside search: 'q' quits
        assert_eq!(key_to_action(key(KeyCode::Char('q')), &view), Some(Action::Quit));

        view.search_active = true;
        assert_eq!(
            key_to_action(key(KeyCode::Char('q')), &view),
            Some(Action::SearchChar('q'))
        );
        assert_eq!(key_to_action(key(KeyCode::Enter), &view), Some(Action::SearchCommit));
        assert_eq!(key_to_action(key(KeyCode::Esc), &view), Some(Action::SearchCancel));
        assert_eq!(
            key_to_action(key(KeyCode::Backspace), &view),
            Some(Action::SearchBackspace)
        );
    }

    #[test]
    fn test_date_keys() {
        let view = ViewState::new();
        assert_eq!(key_to_action(key(KeyCode::Char('[')), &view), Some(Action::PrevDate));
        assert_eq!(key_to_action(key(KeyCode::Char(']')), &view), Some(Action::NextDate));
    }

    #[test]
    fn test_unmapped_key() {
        let view = ViewState::new();
        assert_eq!(key_to_action(key(KeyCode::F(5)), &view), None);
    }
}
