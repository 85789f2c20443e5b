//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the input mapping and the terminal renderer alike.
//!
//! # Field Dimensions
//!
//! - **Columns**: 12 (indexed 0-11, left to right)
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 1000 | Accumulated time per forced downward step |
//! | `TICK_MS` | 16 | Frame period used by the terminal driver (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, ShapeKind, COLUMNS, ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(ShapeKind::ALL.len(), 7);
//!
//! assert_eq!(Intent::from_str("rotate"), Some(Intent::Rotate));
//!
//! assert_eq!(COLUMNS, 12);
//! assert_eq!(ROWS, 22);
//! ```

/// Field width in cells (12 columns)
pub const COLUMNS: usize = 12;

/// Field height in cells (22 rows)
pub const ROWS: usize = 22;

/// Accumulated time that triggers one forced downward step
pub const FALL_INTERVAL_MS: u32 = 1000;

/// Frame period of the terminal driver (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The seven piece kinds
///
/// Each kind has a fixed base matrix and a display color, see
/// `blockfall_core::shapes::shape_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    O,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("J"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Uppercase letter of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::T => "T",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// Display color of a placed block
///
/// Every kind owns exactly one color, so a field cell remembers what filled it
/// only through its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    LightBlue,
    Purple,
    Yellow,
    Green,
    Red,
    Orange,
    DarkBlue,
}

impl Color {
    /// 24-bit RGB value of the color
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::LightBlue => (173, 216, 230),
            Color::Purple => (128, 0, 128),
            Color::Yellow => (255, 255, 0),
            Color::Green => (0, 255, 0),
            Color::Red => (255, 0, 0),
            Color::Orange => (255, 165, 0),
            Color::DarkBlue => (0, 0, 139),
        }
    }
}

/// A cell of the field
///
/// - `None`: empty
/// - `Some(Color)`: filled by a piece of that color
pub type Cell = Option<Color>;

/// Player intents accepted by the session while the game is running
///
/// Mapped upstream from raw left/right/down/up key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one row down
    SoftDrop,
    /// Rotate the piece 90° clockwise
    Rotate,
}

impl Intent {
    /// Parse an intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("SOFTDROP"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}

/// Event recorded when a forced step merges the active piece into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that was merged
    pub kind: ShapeKind,
    /// Number of full rows removed right after the merge
    pub lines_cleared: u32,
    /// The promoted piece collided on spawn and the game ended
    pub topped_out: bool,
}
