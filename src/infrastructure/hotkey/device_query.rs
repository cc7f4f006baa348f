//! Global hot-key adapter using device_query
//!
//! Polls the keyboard state for the configured chord. Polling runs off
//! the async runtime in a blocking task. The chord fires once it has
//! been pressed and fully released, so held modifiers cannot bleed into
//! the paste keystroke the insertion fallback synthesizes afterwards.

use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use device_query::{DeviceQuery, DeviceState, Keycode};

use crate::application::ports::{HotkeyError, HotkeyListener};
use crate::domain::chord::{ChordKey, HotkeyChord};

const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Hot-key listener backed by device_query keyboard polling
pub struct DeviceQueryHotkey {
    chord: HotkeyChord,
    key: Keycode,
}

impl DeviceQueryHotkey {
    /// Create a listener for `chord`.
    ///
    /// Fails when the chord's key has no keyboard-state equivalent.
    pub fn new(chord: HotkeyChord) -> Result<Self, HotkeyError> {
        let key = key_code(chord.key)?;
        Ok(Self { chord, key })
    }
}

/// Resolve a chord key to its device_query key code.
fn key_code(key: ChordKey) -> Result<Keycode, HotkeyError> {
    match key {
        ChordKey::Space => Ok(Keycode::Space),
        ChordKey::Letter(c) => match c {
            'A' => Ok(Keycode::A),
            'B' => Ok(Keycode::B),
            'C' => Ok(Keycode::C),
            'D' => Ok(Keycode::D),
            'E' => Ok(Keycode::E),
            'F' => Ok(Keycode::F),
            'G' => Ok(Keycode::G),
            'H' => Ok(Keycode::H),
            'I' => Ok(Keycode::I),
            'J' => Ok(Keycode::J),
            'K' => Ok(Keycode::K),
            'L' => Ok(Keycode::L),
            'M' => Ok(Keycode::M),
            'N' => Ok(Keycode::N),
            'O' => Ok(Keycode::O),
            'P' => Ok(Keycode::P),
            'Q' => Ok(Keycode::Q),
            'R' => Ok(Keycode::R),
            'S' => Ok(Keycode::S),
            'T' => Ok(Keycode::T),
            'U' => Ok(Keycode::U),
            'V' => Ok(Keycode::V),
            'W' => Ok(Keycode::W),
            'X' => Ok(Keycode::X),
            'Y' => Ok(Keycode::Y),
            'Z' => Ok(Keycode::Z),
            other => Err(HotkeyError::UnsupportedKey(other)),
        },
    }
}

/// Whether every key of the chord is currently down. Extra keys are
/// ignored so the chord still fires with, say, caps lock held.
fn chord_down(chord: &HotkeyChord, key: Keycode, keys: &[Keycode]) -> bool {
    let down = |k: Keycode| keys.contains(&k);

    (!chord.shift || down(Keycode::LShift) || down(Keycode::RShift))
        && (!chord.control || down(Keycode::LControl) || down(Keycode::RControl))
        && (!chord.option || down(Keycode::LAlt) || down(Keycode::RAlt))
        && (!chord.command || down(Keycode::LMeta) || down(Keycode::RMeta))
        && down(key)
}

#[async_trait]
impl HotkeyListener for DeviceQueryHotkey {
    async fn wait_for_chord(&self) -> Result<(), HotkeyError> {
        let chord = self.chord;
        let key = self.key;

        tokio::task::spawn_blocking(move || {
            let device_state = DeviceState::new();
            loop {
                if chord_down(&chord, key, &device_state.get_keys()) {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
            // Wait for release before reporting the press.
            loop {
                if device_state.get_keys().is_empty() {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }
        })
        .await
        .map_err(|e| HotkeyError::Unavailable(format!("Task join error: {}", e)))
    }
}
