//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use swimlane_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard, mouse or focus) to an application message.
///
/// `form_open` selects the form key bindings, where printable keys are text
/// input.
#[must_use]
pub fn event_to_message(event: &Event, form_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if form_open {
                key_to_form_message(*key)
            } else {
                key_to_message(*key)
            }
        }
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::FocusLost => Some(Message::FocusLost),
        _ => None,
    }
}

/// Converts a mouse event to a pointer message.
///
/// Only the left button is tracked: press, drag (move while held) and
/// release.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel drag, or clear selection |
/// | `←` `→` `↑` `↓` | Navigate |
/// | `a` | Add card to the selected column |
/// | `d` or `Delete` | Delete the selected card |
/// | `n` | Move the selected card to its next stage |
/// | `f` | Move the selected card directly to Done |
/// | `t` | Toggle light/dark theme |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('a') => Some(Message::AddCard),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteCard),
        KeyCode::Char('n') => Some(Message::AdvanceCard),
        KeyCode::Char('f') => Some(Message::FinishCard),

        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a form message while the add form is open.
///
/// # Key Bindings (Form)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Add the card |
/// | `Esc` | Cancel |
/// | `Tab` / `Shift+Tab` | Switch between title and description |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Esc => Some(Message::FormCancel),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::FormSwitchField),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}
