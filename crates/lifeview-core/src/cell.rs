//! The [`CellState`] type — how a cell should be painted.

/// Per-cell classification between the current and the previous frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Alive in the current frame.
    Alive,
    /// Dead now but alive in the previous frame.
    Died,
    /// Dead now and dead (or absent) previously.
    Empty,
}

impl CellState {
    /// Classify a cell from its current and previous liveness.
    ///
    /// A live cell is always [`Alive`](CellState::Alive); the previous frame
    /// is only consulted for cells that are dead now, so a cell is never
    /// reported as both alive and newly dead.
    #[inline]
    pub const fn classify(now: bool, before: bool) -> Self {
        if now {
            Self::Alive
        } else if before {
            Self::Died
        } else {
            Self::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_wins_over_previous_state() {
        assert_eq!(CellState::classify(true, true), CellState::Alive);
        assert_eq!(CellState::classify(true, false), CellState::Alive);
    }

    #[test]
    fn dead_after_alive_is_died() {
        assert_eq!(CellState::classify(false, true), CellState::Died);
    }

    #[test]
    fn dead_after_dead_is_empty() {
        assert_eq!(CellState::classify(false, false), CellState::Empty);
    }
}
