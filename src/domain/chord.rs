//! Hot-key chord value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ChordParseError;

/// The non-modifier key of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKey {
    Space,
    /// An ASCII letter, stored uppercase.
    Letter(char),
}

/// A global hot-key chord: one or more modifiers plus a key.
///
/// Parsed from strings like `shift+cmd+space` or `ctrl+opt+v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyChord {
    pub shift: bool,
    pub control: bool,
    pub option: bool,
    pub command: bool,
    pub key: ChordKey,
}

impl HotkeyChord {
    /// The default trigger chord, Shift+Command+Space.
    pub const fn default_chord() -> Self {
        Self {
            shift: true,
            control: false,
            option: false,
            command: true,
            key: ChordKey::Space,
        }
    }
}

impl Default for HotkeyChord {
    fn default() -> Self {
        Self::default_chord()
    }
}

impl FromStr for HotkeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || ChordParseError {
            input: s.to_string(),
        };

        let (mut shift, mut control, mut option, mut command) = (false, false, false, false);
        let mut key = None;

        for token in input.split('+') {
            match token.trim() {
                "shift" => shift = true,
                "ctrl" | "control" => control = true,
                "opt" | "option" | "alt" => option = true,
                "cmd" | "command" | "meta" | "super" => command = true,
                "space" if key.is_none() => key = Some(ChordKey::Space),
                token if key.is_none() => {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphabetic() => {
                            key = Some(ChordKey::Letter(c.to_ascii_uppercase()));
                        }
                        _ => return Err(err()),
                    }
                }
                _ => return Err(err()),
            }
        }

        let key = key.ok_or_else(|| err())?;

        // A bare key would fire on ordinary typing.
        if !(shift || control || option || command) {
            return Err(err());
        }

        Ok(Self {
            shift,
            control,
            option,
            command,
            key,
        })
    }
}

impl fmt::Display for HotkeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "shift+")?;
        }
        if self.control {
            write!(f, "ctrl+")?;
        }
        if self.option {
            write!(f, "opt+")?;
        }
        if self.command {
            write!(f, "cmd+")?;
        }
        match self.key {
            ChordKey::Space => write!(f, "space"),
            ChordKey::Letter(c) => write!(f, "{}", c.to_ascii_lowercase()),
        }
    }
}
