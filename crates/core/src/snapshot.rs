//! Snapshot module - plain copy of session state for renderers
//!
//! A snapshot is `Copy` and owns no heap data, so the driver keeps one around
//! and refills it each frame with [`crate::Session::snapshot_into`].

use crate::piece::Piece;
use crate::types::{Cell, ShapeKind, COLUMNS, ROWS};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub field: [[Cell; COLUMNS]; ROWS],
    pub active: Piece,
    pub next: Piece,
    pub game_over: bool,
    pub lines_cleared: u32,
    pub fall_timer_ms: u32,
    pub seed: u32,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            field: [[None; COLUMNS]; ROWS],
            active: Piece::spawn(ShapeKind::I),
            next: Piece::spawn(ShapeKind::I),
            game_over: false,
            lines_cleared: 0,
            fall_timer_ms: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_reused_snapshot_is_fully_overwritten() {
        let mut snap = SessionSnapshot::default();
        snap.game_over = true;
        snap.lines_cleared = 9;
        snap.field[0][0] = Some(crate::types::Color::Red);

        let session = Session::new(3);
        session.snapshot_into(&mut snap);

        assert_eq!(snap, session.snapshot());
        assert!(snap.playable());
        assert_eq!(snap.field[0][0], None);
    }
}
