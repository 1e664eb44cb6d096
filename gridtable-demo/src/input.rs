//! Conversion from crossterm input to table input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridtable::keybinds::{Key, KeyCombo, Modifiers};

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}

/// Convert a crossterm key event to a key combo the table understands.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    let key = convert_key(event.code)?;
    Some(KeyCombo::new(key, convert_modifiers(event.modifiers)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_ctrl() {
        let combo = convert_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(combo, Some(KeyCombo::key(Key::Space)));

        let combo = convert_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(combo, Some(KeyCombo::key(Key::Char('a')).ctrl()));

        assert_eq!(convert_key_event(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)), None);
    }
}
