//! Parsing key strings like "ctrl+shift+z" into Keystrokes
//!
//! Used by the headless driver to replay keystroke scripts.

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors from parsing a key string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty,
    InvalidKey(String),
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::Empty => write!(f, "Empty key string"),
            KeyParseError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
        }
    }
}

impl std::error::Error for KeyParseError {}

/// Parse a key string like "ctrl+shift+z" into a Keystroke
///
/// The final part is the key; earlier parts are modifiers. A lone "+" is the
/// plus character. Single characters keep their case.
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeyParseError> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return Err(KeyParseError::Empty);
    }
    if key_str == "+" {
        return Ok(Keystroke::char('+'));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, mod_parts) = match parts.split_last() {
        Some((key, mods)) if !key.is_empty() => (*key, mods),
        _ => return Err(KeyParseError::InvalidKey(key_str.to_string())),
    };

    let mut mods = Modifiers::NONE;
    for part in mod_parts {
        mods = mods
            | match part.to_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "shift" => Modifiers::SHIFT,
                "alt" | "option" | "opt" => Modifiers::ALT,
                "meta" | "super" | "win" | "cmd" => Modifiers::META,
                _ => {
                    return Err(KeyParseError::InvalidKey(format!(
                        "Unknown modifier '{}' in {}",
                        part, key_str
                    )))
                }
            };
    }

    Ok(Keystroke::new(parse_key_code(key_part)?, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Char(' ')),
        "plus" => Ok(KeyCode::Char('+')),
        "parenleft" => Ok(KeyCode::Char('(')),
        "parenright" => Ok(KeyCode::Char(')')),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),

        "shift" | "shift_l" | "shift_r" => Ok(KeyCode::Shift),
        "ctrl" | "control" | "control_l" | "control_r" => Ok(KeyCode::Control),
        "alt" | "alt_l" | "alt_r" => Ok(KeyCode::Alt),
        "meta" | "super" | "cmd" => Ok(KeyCode::Meta),

        _ => Err(KeyParseError::InvalidKey(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_chars_keep_case() {
        assert_eq!(parse_key_string("a").unwrap(), Keystroke::char('a'));
        assert_eq!(parse_key_string("A").unwrap(), Keystroke::char('A'));
        assert_eq!(parse_key_string("(").unwrap(), Keystroke::char('('));
        assert_eq!(parse_key_string("+").unwrap(), Keystroke::char('+'));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            parse_key_string("Return").unwrap(),
            Keystroke::key(KeyCode::Enter)
        );
        assert_eq!(
            parse_key_string("BackSpace").unwrap(),
            Keystroke::key(KeyCode::Backspace)
        );
        assert_eq!(parse_key_string("space").unwrap(), Keystroke::char(' '));
        assert_eq!(parse_key_string("parenleft").unwrap(), Keystroke::char('('));
        assert_eq!(
            parse_key_string("Shift_L").unwrap(),
            Keystroke::key(KeyCode::Shift)
        );
    }

    #[test]
    fn test_parse_with_modifiers() {
        let stroke = parse_key_string("ctrl+shift+z").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('z'));
        assert!(stroke.mods.ctrl());
        assert!(stroke.mods.shift());
        assert_eq!(
            parse_key_string("Ctrl+y").unwrap(),
            Keystroke::char_with_mods('y', Modifiers::CTRL)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_key_string("   "), Err(KeyParseError::Empty));
        assert!(matches!(
            parse_key_string("hyper+z"),
            Err(KeyParseError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("ctrl+"),
            Err(KeyParseError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("florp"),
            Err(KeyParseError::InvalidKey(_))
        ));
    }
}
