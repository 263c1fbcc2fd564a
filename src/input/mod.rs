//! # Input Module
//!
//! The pressed-key set the simulation reads once per tick.
//!
//! An input collaborator updates the set asynchronously from whatever device
//! events it owns; the core only ever reads it synchronously inside
//! [`Session::tick`](crate::game::Session::tick). There is no further
//! input-device abstraction by design.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The keys the simulation recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Move forward
    W,
    /// Move backward
    S,
    /// Strafe left
    A,
    /// Strafe right
    D,
    /// Rotate left
    ArrowLeft,
    /// Rotate right
    ArrowRight,
    /// Start a run from the intro
    Enter,
    /// Abandon the current run
    Escape,
}

impl Key {
    /// Parses the lowercase key identifiers used at the collaborator
    /// boundary (`"w"`, `"arrowleft"`, ...).
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "a" => Some(Key::A),
            "d" => Some(Key::D),
            "arrowleft" => Some(Key::ArrowLeft),
            "arrowright" => Some(Key::ArrowRight),
            "enter" => Some(Key::Enter),
            "escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// The set of currently pressed keys.
///
/// # Examples
///
/// ```
/// use gloam::{InputState, Key};
///
/// let mut input = InputState::new();
/// input.press(Key::W);
/// assert!(input.is_pressed(Key::W));
///
/// input.release(Key::W);
/// assert!(!input.is_pressed(Key::W));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    pressed: HashSet<Key>,
}

impl InputState {
    /// Creates an empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input state with the given keys held.
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    /// Marks a key as held.
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    /// Marks a key as released.
    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Whether a key is currently held.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Releases every key.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
