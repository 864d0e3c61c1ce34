/// How a move is checked for leaving the mover's own king attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckSafety {
    /// Plays the move on a scratch copy of the board and looks for attackers
    /// of the king on the result.
    #[default]
    Simulated,
    /// Looks for attackers of the king's current square on the board as it is
    /// before the move, only excusing an attacker standing on the
    /// destination.
    ///
    /// This misses checks discovered through the source square and lets the
    /// king step onto attacked squares.
    Approximate,
}
impl CheckSafety {
    pub const fn is_simulated(self) -> bool {
        matches!(self, Self::Simulated)
    }
    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::Approximate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rules {
    pub check_safety: CheckSafety,
}
impl Rules {
    pub const fn approximate() -> Self {
        Rules {
            check_safety: CheckSafety::Approximate,
        }
    }
}
