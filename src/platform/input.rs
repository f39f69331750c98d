//! Keyboard bindings
//!
//! Maps physical keys reported by the host to logical inputs: a strike key
//! per slot and side, a pause key and the three numbered menu keys.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SLOT_COUNT;
use crate::sim::{Side, SlotIndex, Strike, TickInput};

/// A physical key as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Letter or digit (letters compared case-insensitively)
    Char(char),
    Space,
}

impl Key {
    fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_uppercase()),
            other => other,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Key::Char(c) => c.to_ascii_uppercase().to_string(),
            Key::Space => "SPACE".to_string(),
        }
    }
}

/// Binding problems found by [`KeyBindings::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The same key is bound to two inputs
    Duplicate { key: Key, first: String, second: String },
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::Duplicate { key, first, second } => write!(
                f,
                "key {} is bound to both {} and {}",
                key.label(),
                first,
                second
            ),
        }
    }
}

impl std::error::Error for BindingError {}

/// Logical key map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub red: [Key; SLOT_COUNT],
    pub blue: [Key; SLOT_COUNT],
    pub pause: Key,
    pub menu: [Key; 3],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            red: ['S', 'E', 'Z', 'R', 'G'].map(Key::Char),
            blue: ['H', 'U', 'B', 'I', 'L'].map(Key::Char),
            pause: Key::Space,
            menu: ['1', '2', '3'].map(Key::Char),
        }
    }
}

impl KeyBindings {
    pub fn strike_key(&self, strike: Strike) -> Key {
        match strike.side {
            Side::Red => self.red[strike.slot.index()],
            Side::Blue => self.blue[strike.slot.index()],
        }
    }

    /// Every binding with a human-readable name, for validation messages
    fn named(&self) -> Vec<(Key, String)> {
        let mut all = Vec::with_capacity(2 * SLOT_COUNT + 4);
        for slot in SlotIndex::ALL {
            for side in Side::BOTH {
                let key = self.strike_key(Strike::new(slot, side));
                all.push((key, format!("{} slot {}", side.as_str(), slot.index())));
            }
        }
        all.push((self.pause, "pause".to_string()));
        for (i, key) in self.menu.iter().enumerate() {
            all.push((*key, format!("menu {}", i + 1)));
        }
        all
    }

    /// Reject bindings where one key drives two inputs
    pub fn validate(&self) -> Result<(), BindingError> {
        let all = self.named();
        for (i, (key, name)) in all.iter().enumerate() {
            if let Some((_, other)) = all[i + 1..]
                .iter()
                .find(|(k, _)| k.normalized() == key.normalized())
            {
                return Err(BindingError::Duplicate {
                    key: *key,
                    first: name.clone(),
                    second: other.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build a tick's input from the keys pressed this frame and the pointer
    pub fn translate(&self, pressed: &[Key], pointer: Option<Vec2>, click: bool) -> TickInput {
        let pressed: Vec<Key> = pressed.iter().map(|k| k.normalized()).collect();
        let is_down = |key: Key| pressed.contains(&key.normalized());

        let strikes = SlotIndex::ALL
            .into_iter()
            .flat_map(|slot| Side::BOTH.map(|side| Strike::new(slot, side)))
            .filter(|strike| is_down(self.strike_key(*strike)))
            .collect();

        TickInput {
            strikes,
            pause: is_down(self.pause),
            menu_key: self.menu.iter().position(|k| is_down(*k)),
            pointer,
            click,
        }
    }

    /// Hole indicator text, red key then blue key (e.g. "S - H")
    pub fn indicator(&self, slot: SlotIndex) -> String {
        format!(
            "{} - {}",
            self.red[slot.index()].label(),
            self.blue[slot.index()].label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_valid() {
        assert_eq!(KeyBindings::default().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut bindings = KeyBindings::default();
        bindings.blue[3] = Key::Char('s');
        let err = bindings.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "key S is bound to both Red slot 0 and Blue slot 3"
        );
    }

    #[test]
    fn test_translate() {
        let bindings = KeyBindings::default();
        let input = bindings.translate(
            &[Key::Char('z'), Key::Char('L'), Key::Space, Key::Char('2')],
            None,
            false,
        );
        assert_eq!(
            input.strikes,
            vec![
                Strike::new(SlotIndex::S2, Side::Red),
                Strike::new(SlotIndex::S4, Side::Blue),
            ]
        );
        assert!(input.pause);
        assert_eq!(input.menu_key, Some(1));
    }

    #[test]
    fn test_indicator() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.indicator(SlotIndex::S2), "Z - B");
    }
}
