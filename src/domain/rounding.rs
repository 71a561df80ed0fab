//! Explicit rounding direction.

/// Rounding direction for integer division.
///
/// Every division that can lose precision names its direction so that
/// rounding always favours the pool: outputs round [`Down`](Self::Down),
/// amounts the pool takes in round [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}
