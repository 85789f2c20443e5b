//! Session module - the game loop state machine
//!
//! Ties together field, pieces, collision checks and the randomizer. The
//! session is the only owner and mutator of game state; renderers read it
//! through accessors or a [`SessionSnapshot`].
//!
//! States: `Running` and `GameOver`. Illegal moves are never errors, they are
//! reverted before the call returns, so the committed active piece is always
//! collision-free. The one exception is a promoted piece that already collides
//! on spawn, which is exactly what ends the game.

use crate::collision::collides;
use crate::field::Field;
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::snapshot::SessionSnapshot;
use crate::types::{Cell, Intent, LockEvent, COLUMNS, FALL_INTERVAL_MS, ROWS};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    active: Piece,
    next: Piece,
    randomizer: PieceRandomizer,
    /// Time accumulated since the last forced downward step.
    fall_timer_ms: u32,
    game_over: bool,
    /// Rows cleared since the last reset.
    lines_cleared: u32,
    /// Last merge event (consumed by the driver).
    last_event: Option<LockEvent>,
}

impl Session {
    /// Start a running game on an empty field with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let active = Piece::spawn(randomizer.next_kind());
        let next = Piece::spawn(randomizer.next_kind());

        Self {
            field: Field::new(),
            active,
            next,
            randomizer,
            fall_timer_ms: 0,
            game_over: false,
            lines_cleared: 0,
            last_event: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.game_over {
            SessionState::GameOver
        } else {
            SessionState::Running
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active_piece(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Piece {
        &mut self.active
    }

    /// Copy of the settled field as a 2D grid
    pub fn field_snapshot(&self) -> [[Cell; COLUMNS]; ROWS] {
        let mut grid = [[None; COLUMNS]; ROWS];
        self.field.write_grid(&mut grid);
        grid
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.field.write_grid(&mut out.field);
        out.active = self.active;
        out.next = self.next;
        out.game_over = self.game_over;
        out.lines_cleared = self.lines_cleared;
        out.fall_timer_ms = self.fall_timer_ms;
        out.seed = self.randomizer.seed();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last merge event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the fall timer by `elapsed_ms`
    ///
    /// Once the accumulated time exceeds the fall interval the timer restarts
    /// from zero and exactly one forced downward step happens, however long
    /// the frame was. Returns whether a forced step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= FALL_INTERVAL_MS {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a player intent; ignored once the game is over
    ///
    /// Returns whether the piece actually moved or rotated.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        if self.game_over {
            return false;
        }

        match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::SoftDrop => self.try_move(0, 1),
            Intent::Rotate => self.try_rotate(),
        }
    }

    /// Empty the field, respawn the active piece and resume play
    ///
    /// The pending next piece is kept.
    pub fn reset(&mut self) {
        self.field.reset();
        self.active = Piece::spawn(self.randomizer.next_kind());
        self.fall_timer_ms = 0;
        self.game_over = false;
        self.lines_cleared = 0;
        self.last_event = None;
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        self.active.translate(dx, dy);
        if collides(&self.active, &self.field) {
            self.active.translate(-dx, -dy);
            return false;
        }
        true
    }

    fn try_rotate(&mut self) -> bool {
        self.active.rotate();
        if collides(&self.active, &self.field) {
            self.active.rotate_back();
            return false;
        }
        true
    }

    /// Forced gravity step: move down, or lock the piece where it rests
    fn step_down(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_active();
        }
    }

    /// Merge the active piece, clear rows, promote the next piece
    fn lock_active(&mut self) {
        let kind = self.active.kind;
        self.field.merge(&self.active);

        let cleared = self.field.clear_full_rows() as u32;
        self.lines_cleared += cleared;

        self.active = self.next;
        self.next = Piece::spawn(self.randomizer.next_kind());

        let topped_out = collides(&self.active, &self.field);
        if topped_out {
            self.game_over = true;
        }

        self.last_event = Some(LockEvent {
            kind,
            lines_cleared: cleared,
            topped_out,
        });
    }
}
