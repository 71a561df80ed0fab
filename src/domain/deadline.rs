//! Operation deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AmmError, Result};

/// Latest unix time (seconds) at which an operation may still execute.
///
/// An operation is accepted while `now <= deadline`.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Deadline;
///
/// let deadline = Deadline::at(1_700_000_000);
/// assert!(!deadline.is_expired(1_700_000_000));
/// assert!(deadline.is_expired(1_700_000_001));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Deadline(u64);

impl Deadline {
    /// A deadline that never expires.
    pub const NEVER: Self = Self(u64::MAX);

    /// A deadline at the given unix timestamp.
    #[must_use]
    pub const fn at(unix_seconds: u64) -> Self {
        Self(unix_seconds)
    }

    /// The timestamp.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` once `now` is strictly past the deadline.
    #[must_use]
    pub const fn is_expired(&self, now: u64) -> bool {
        now > self.0
    }

    /// Fails if the deadline has passed at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DeadlineExpired`] when `now > deadline`.
    pub const fn ensure_open(&self, now: u64) -> Result<()> {
        if self.is_expired(now) {
            return Err(AmmError::DeadlineExpired);
        }
        Ok(())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::NEVER
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
