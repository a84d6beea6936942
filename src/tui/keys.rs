//! Translation from crossterm terminal events into reducer events.

use crate::app::{Event, Key};
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a terminal event onto an [`Event`] the reducer understands.
///
/// Returns `None` for input the interface ignores: key releases, mouse and
/// focus events, pastes, and keys outside the supported set.
#[must_use]
pub fn translate(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => translate_key(key).map(Event::Key),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Maps a single key press onto a logical [`Key`].
#[must_use]
pub fn translate_key(key: &KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Key::CtrlC),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_and_navigation_keys() {
        assert_eq!(translate_key(&key(KeyCode::Char('j'), KeyModifiers::NONE)), Some(Key::Char('j')));
        assert_eq!(translate_key(&key(KeyCode::Char('N'), KeyModifiers::SHIFT)), Some(Key::Char('N')));
        assert_eq!(translate_key(&key(KeyCode::Char(' '), KeyModifiers::NONE)), Some(Key::Char(' ')));
        assert_eq!(translate_key(&key(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(translate_key(&key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(Key::BackTab));
        assert_eq!(translate_key(&key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn control_chords() {
        assert_eq!(translate_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Key::CtrlC));
        assert_eq!(translate_key(&key(KeyCode::Char('d'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate_key(&key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_key(&release), None);
    }

    #[test]
    fn resize_and_other_events() {
        assert_eq!(
            translate(&TermEvent::Resize(100, 30)),
            Some(Event::Resize { width: 100, height: 30 })
        );
        assert_eq!(translate(&TermEvent::FocusGained), None);
        assert_eq!(
            translate(&TermEvent::Key(key(KeyCode::Esc, KeyModifiers::NONE))),
            Some(Event::Key(Key::Esc))
        );
    }
}
