//! Shared, lock-protected pool record.

use core::fmt;
use core::time::Duration;

use parking_lot::{RwLock, RwLockWriteGuard};
use tracing::warn;

use crate::domain::{PoolId, PoolKey};
use crate::error::{AmmError, Result};
use crate::pool::LiquidityPool;

/// A registered pool behind its own reader-writer lock.
///
/// Readers clone a consistent [`snapshot`](Self::snapshot); writers hold the
/// guard returned by [`lock`](Self::lock) for the whole of one operation.
/// Both waits are bounded by the registry's configured lock timeout.
pub struct PoolHandle {
    id: PoolId,
    key: PoolKey,
    timeout: Duration,
    pool: RwLock<LiquidityPool>,
}

impl PoolHandle {
    pub(crate) fn new(pool: LiquidityPool, timeout: Duration) -> Self {
        Self {
            id: pool.id(),
            key: pool.key(),
            timeout,
            pool: RwLock::new(pool),
        }
    }

    /// Deterministic pool identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Registry key.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        self.key
    }

    /// Clones the current pool state under a short read lock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Busy`] if a writer holds the pool past the
    /// timeout.
    pub fn snapshot(&self) -> Result<LiquidityPool> {
        match self.pool.try_read_for(self.timeout) {
            Some(guard) => Ok(guard.clone()),
            None => {
                warn!(pool = %self.id, timeout = ?self.timeout, "pool read lock timed out");
                Err(AmmError::Busy)
            }
        }
    }

    /// Acquires exclusive access to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Busy`] if the lock is not acquired within the
    /// timeout.
    pub fn lock(&self) -> Result<RwLockWriteGuard<'_, LiquidityPool>> {
        match self.pool.try_write_for(self.timeout) {
            Some(guard) => Ok(guard),
            None => {
                warn!(pool = %self.id, timeout = ?self.timeout, "pool write lock timed out");
                Err(AmmError::Busy)
            }
        }
    }
}

impl fmt::Debug for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolHandle")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
