//! Payload records shared by several event kinds.

use std::fmt;

use crate::{Modifiers, WindowRef};

/// Payload of [`Event::KeyDown`](crate::Event::KeyDown) and
/// [`Event::KeyUp`](crate::Event::KeyUp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub window: WindowRef,
    pub modifiers: Modifiers,
    /// Toolkit key symbol.
    pub keysym: u32,
    /// Character produced by the keypress, `'\0'` when none.
    pub codepoint: char,
    /// Time the keypress occurred, in microseconds.
    pub time: u64,
}

/// Payload of [`Event::ButtonDown`](crate::Event::ButtonDown) and
/// [`Event::ButtonUp`](crate::Event::ButtonUp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonEvent {
    pub window: WindowRef,
    /// Zero-based button index.
    pub button: u32,
    pub modifiers: Modifiers,
    pub x: i32,
    pub y: i32,
    /// Time the press occurred, in microseconds.
    pub time: u64,
}

/// Payload of [`Event::MouseMotion`](crate::Event::MouseMotion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    pub window: WindowRef,
    /// The pointer just left the window.
    pub just_exited: bool,
    pub x: i32,
    pub y: i32,
    /// Time the motion occurred, in microseconds.
    pub time: u64,
    /// The motion carries a drag-and-drop payload.
    pub drag_message: bool,
}

/// Which scroll bar button was pressed, for
/// [`Event::ScrollBarPart`](crate::Event::ScrollBarPart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollBarPart {
    UpButton,
    DownButton,
}

impl fmt::Display for ScrollBarPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollBarPart::UpButton => write!(f, "up-button"),
            ScrollBarPart::DownButton => write!(f, "down-button"),
        }
    }
}
