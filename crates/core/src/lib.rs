//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the shape
//! catalog, pieces, the field, collision checks and the session state
//! machine. It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Fast**: Moves, merges and line clears never allocate
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7 piece matrices and colors, geometric rotation
//! - [`piece`]: a positioned, rotatable piece
//! - [`field`]: 12x22 grid with merge and full-row clearing
//! - [`collision`]: the piece-vs-field legality predicate
//! - [`rng`]: uniform random piece selection
//! - [`session`]: active/next piece, gravity timer, game over
//! - [`snapshot`]: plain copy of session state for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: once more than 1000ms has accumulated, the piece steps down
//!   one row and the timer restarts from zero
//! - **Locking**: a forced step that would collide merges the piece instead
//! - **Rotation**: 90° clockwise around the matrix's top-left anchor, no wall
//!   kicks; blocked rotations are reverted
//! - **Game over**: the promoted next piece collides on spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::Intent;
//!
//! let mut session = Session::new(12345);
//!
//! session.handle_intent(Intent::MoveLeft);
//! session.handle_intent(Intent::Rotate);
//!
//! // Not enough time for gravity yet
//! assert!(!session.tick(16));
//! assert!(!session.is_game_over());
//! ```

pub mod collision;
pub mod field;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use field::Field;
pub use piece::Piece;
pub use rng::{PieceRandomizer, SimpleRng};
pub use session::{Session, SessionState};
pub use shapes::{color_of, matrix_of, shape_of, Matrix};
pub use snapshot::SessionSnapshot;
