//! Semantic application events — crossterm events mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] (card list focused) or
//! [`to_app_event_insert`] (search bar focused) on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`].
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab`                   | `FocusNext`                |
//! | `/`                     | `QueryFocus`               |
//! | `?`, `F1`               | `Help`                     |
//! | `c`                     | `Clear`                    |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | left click              | `Click(col, row)`          |
//! | mouse wheel             | `Wheel(Up / Down)`         |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While the search bar is focused every printable key (including `q`, `j`,
//! `k`, `/`, `?`, `c`) produces [`AppEvent::Char`]. Arrow keys produce `Nav`,
//! `Ctrl+u` produces `Clear`, and `Ctrl+c`, `F1`, `Esc`, `Enter`, `Tab` and
//! `Backspace` keep their bindings.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Cardinal direction for list navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Toggle keyboard focus between the search bar and the card list.
    FocusNext,
    /// Transfer focus to the search bar.
    QueryFocus,
    /// Toggle the keybinding popup.
    Help,
    /// Reset the query to empty.
    Clear,
    /// Scroll the card list up one page.
    ScrollUp,
    /// Scroll the card list down one page.
    ScrollDown,
    /// Arrow / hjkl navigation.
    Nav(Direction),
    /// Mouse wheel over the terminal.
    Wheel(Direction),
    /// Left mouse button pressed at (column, row).
    Click(u16, u16),
    /// A printable character forwarded to the search input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Confirm the highlighted suggestion.
    Enter,
    /// Cancel key: dismiss suggestions or leave the search bar.
    Escape,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (card list / normal mode).
///
/// Returns `None` for events with no meaning to the application.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for the search bar.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click(mouse.column, mouse.row)),
        MouseEventKind::ScrollUp => Some(AppEvent::Wheel(Direction::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Wheel(Direction::Down)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),
        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::QueryFocus),
        Char('?') => Some(AppEvent::Help),
        F(1) => Some(AppEvent::Help),
        Char('c') if key.modifiers == Mod::NONE => Some(AppEvent::Clear),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),

        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::Clear),
        F(1) => Some(AppEvent::Help),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn quit_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn focus_and_query_keys() {
        assert_eq!(to_app_event(press(KeyCode::Tab)), Some(AppEvent::FocusNext));
        assert_eq!(
            to_app_event(press(KeyCode::Char('/'))),
            Some(AppEvent::QueryFocus)
        );
    }

    #[test]
    fn help_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('?'))), Some(AppEvent::Help));
        assert_eq!(to_app_event(press(KeyCode::F(1))), Some(AppEvent::Help));
        assert_eq!(to_app_event_insert(press(KeyCode::F(1))), Some(AppEvent::Help));
    }

    #[test]
    fn list_navigation() {
        assert_eq!(
            to_app_event(press(KeyCode::Char('j'))),
            Some(AppEvent::Nav(Direction::Down))
        );
        assert_eq!(
            to_app_event(press(KeyCode::Up)),
            Some(AppEvent::Nav(Direction::Up))
        );
        assert_eq!(to_app_event(ctrl(KeyCode::Char('d'))), Some(AppEvent::ScrollDown));
        assert_eq!(to_app_event(press(KeyCode::PageUp)), Some(AppEvent::ScrollUp));
    }

    #[test]
    fn clear_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('c'))), Some(AppEvent::Clear));
        assert_eq!(
            to_app_event_insert(ctrl(KeyCode::Char('u'))),
            Some(AppEvent::Clear)
        );
    }

    #[test]
    fn mouse_events() {
        assert_eq!(
            to_app_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(AppEvent::Click(4, 7))
        );
        assert_eq!(
            to_app_event_insert(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(AppEvent::Wheel(Direction::Down))
        );
        assert_eq!(
            to_app_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }

    #[test]
    fn resize_event() {
        assert_eq!(
            to_app_event(Event::Resize(120, 40)),
            Some(AppEvent::Resize(120, 40))
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(to_app_event(press(KeyCode::F(5))), None);
        assert_eq!(to_app_event(press(KeyCode::Char('z'))), None);
    }

    // ── Insert mode ────────────────────────────────────────────────────────

    #[test]
    fn insert_mode_shortcut_letters_are_chars() {
        for ch in ['q', 'j', 'k', 'c', '/', '?'] {
            assert_eq!(
                to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should produce Char"
            );
        }
        assert_eq!(
            to_app_event_insert(key(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Some(AppEvent::Char('K'))
        );
    }

    #[test]
    fn insert_mode_arrows_navigate() {
        assert_eq!(
            to_app_event_insert(press(KeyCode::Left)),
            Some(AppEvent::Nav(Direction::Left))
        );
        assert_eq!(
            to_app_event_insert(press(KeyCode::Down)),
            Some(AppEvent::Nav(Direction::Down))
        );
    }

    #[test]
    fn insert_mode_ctrl_c_still_quits() {
        assert_eq!(
            to_app_event_insert(ctrl(KeyCode::Char('c'))),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn insert_mode_escape_and_enter() {
        assert_eq!(to_app_event_insert(press(KeyCode::Esc)), Some(AppEvent::Escape));
        assert_eq!(to_app_event_insert(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(
            to_app_event_insert(press(KeyCode::Backspace)),
            Some(AppEvent::Backspace)
        );
    }
}
