//! Keyboard input event types.
//!
//! Only the keys the swipe cards react to get their own code; everything
//! else maps to [`KeyCode::Unknown`] so hosts can forward keys unfiltered.

use std::fmt;

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down.
    KeyDown,
    /// Key was released.
    KeyUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    Unknown,
}

/// A keyboard input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub event_type: KeyEventType,
    /// Set for auto-repeated key downs while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, event_type: KeyEventType) -> Self {
        Self {
            key_code,
            event_type,
            repeat: false,
        }
    }

    pub fn key_down(key_code: KeyCode) -> Self {
        Self::new(key_code, KeyEventType::KeyDown)
    }

    pub fn key_up(key_code: KeyCode) -> Self {
        Self::new(key_code, KeyEventType::KeyUp)
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn is_key_down(&self) -> bool {
        self.event_type == KeyEventType::KeyDown
    }

    pub fn is_key_up(&self) -> bool {
        self.event_type == KeyEventType::KeyUp
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyEvent({:?}, {:?})", self.key_code, self.event_type)?;
        if self.repeat {
            write!(f, " repeat")?;
        }
        Ok(())
    }
}
