//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        let keystroke = parse_key_string(&entry.key)?;
        let command = Command::from_str(&entry.command)
            .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "shift+backspace" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "cmd" => mods = mods | Modifiers::cmd(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                // This should be the key itself
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part
        .ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    if let Some(n) = key
        .strip_prefix("numpad")
        .or_else(|| key.strip_prefix("num"))
        .and_then(|rest| rest.parse::<u8>().ok())
        .filter(|n| *n <= 9)
    {
        return Ok(KeyCode::Numpad(n));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "numpad_decimal" | "numdot" => Ok(KeyCode::NumpadDecimal),
        "numpad_enter" | "numenter" => Ok(KeyCode::NumpadEnter),
        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let stroke = parse_key_string("7").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('7'));
        assert!(stroke.mods.is_empty());
    }

    #[test]
    fn test_parse_point_key() {
        assert_eq!(parse_key_string(".").unwrap().key, KeyCode::Char('.'));
    }

    #[test]
    fn test_parse_key_with_modifier() {
        let stroke = parse_key_string("shift+backspace").unwrap();
        assert_eq!(stroke.key, KeyCode::Backspace);
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_parse_numpad_keys() {
        assert_eq!(parse_key_string("numpad4").unwrap().key, KeyCode::Numpad(4));
        assert_eq!(parse_key_string("num0").unwrap().key, KeyCode::Numpad(0));
        assert_eq!(
            parse_key_string("numpad_decimal").unwrap().key,
            KeyCode::NumpadDecimal
        );
        assert!(parse_key_string("numpad12").is_err());
    }

    #[test]
    fn test_parse_invalid_keys() {
        assert!(matches!(
            parse_key_string("ctrl+a+b"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("shift"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("hyper"),
            Err(KeymapError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - key: "1"
    command: Digit1
  - key: "shift+backspace"
    command: ClearInput
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::Digit(1));
        assert_eq!(bindings[1].command, Command::ClearInput);
    }

    #[test]
    fn test_parse_yaml_invalid_command() {
        let yaml = r#"
bindings:
  - key: "1"
    command: Teleport
"#;
        assert_eq!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand("Teleport".to_string()))
        );
    }

    #[test]
    fn test_parse_yaml_malformed() {
        let yaml = "bindings:\n  - key: [\n";
        assert!(matches!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::ParseError(_))
        ));
    }
}
