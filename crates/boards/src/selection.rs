//! Currently selected board for profile-scoped queries.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};

use crate::types::BoardType;

/// The board a configurator session is operating on.
///
/// Carried explicitly by whatever owns the session instead of living in a
/// process-wide mutable. It is plain data with no locking; keep each
/// instance confined to one thread or wrap it yourself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSelection {
    current: BoardType,
}

impl BoardSelection {
    pub fn new(board: BoardType) -> Self {
        Self { current: board }
    }

    pub fn set(&mut self, board: BoardType) {
        self.current = board;
    }

    /// Select a board by raw profile id. Out-of-range ids silently select
    /// [`BoardType::Unknown`].
    pub fn set_repr(&mut self, raw: i32) {
        self.current = BoardType::from_repr(raw);
    }

    pub fn current(self) -> BoardType {
        self.current
    }
}
