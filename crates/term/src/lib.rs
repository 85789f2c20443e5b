//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Frames are
//! composed in a plain framebuffer and then flushed to the terminal backend,
//! with no widget or layout library in between.
//!
//! - [`game_view`] turns a session snapshot into a framebuffer (pure)
//! - [`renderer`] writes framebuffers to the terminal with crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{lines_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
