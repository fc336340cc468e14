//! UI events - messages from the terminal to the session

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The finite set of events the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Resize { width: u16, height: u16 },
    FocusNext,
    MoveUp,
    MoveDown,
    /// Execute the selected request
    Activate,
    Quit,
}

/// Convert a key event to a UiEvent
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Tab => Some(UiEvent::FocusNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
        KeyCode::Enter => Some(UiEvent::Activate),
        _ => None,
    }
}

/// Convert any terminal event to a UiEvent
pub fn terminal_event_to_ui_event(event: Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) => key_to_ui_event(key),
        Event::Resize(width, height) => Some(UiEvent::Resize { width, height }),
        _ => None,
    }
}
