//! Pool discovery and creation.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::PoolHandle;
use crate::config::EngineConfig;
use crate::domain::{BasisPoints, CurveKind, PoolId, PoolKey, Token, TokenAddress, TokenPair};
use crate::error::{AmmError, Result};
use crate::pool::LiquidityPool;

/// Maps `(token pair, curve)` to at most one pool.
///
/// The map has its own lock, separate from the per-pool locks, and is only
/// held long enough to insert or clone an [`Arc<PoolHandle>`]. Every lookup
/// accepts its two token addresses in either order.
///
/// # Examples
///
/// ```
/// use hydra_dex::config::EngineConfig;
/// use hydra_dex::domain::{CurveKind, Token, TokenAddress};
/// use hydra_dex::registry::PoolRegistry;
///
/// let registry = PoolRegistry::new(EngineConfig::default()).expect("config");
/// let a = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
/// let b = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
///
/// let created = registry.create_pool(a, b, CurveKind::StableSwap).expect("pool");
/// let found = registry
///     .resolve_pool(b.address(), a.address(), CurveKind::StableSwap)
///     .expect("registered");
/// assert_eq!(created.id(), found.id());
/// ```
#[derive(Debug)]
pub struct PoolRegistry {
    config: EngineConfig,
    pools: RwLock<BTreeMap<PoolKey, Arc<PoolHandle>>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineConfig::validate`] failures.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pools: RwLock::new(BTreeMap::new()),
        })
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Creates the pool for `(token_a, token_b, curve)` with the configured
    /// default fee, or returns the existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens share an address.
    pub fn create_pool(
        &self,
        token_a: Token,
        token_b: Token,
        curve: CurveKind,
    ) -> Result<Arc<PoolHandle>> {
        self.create_pool_with_fee(token_a, token_b, curve, self.config.fee_for(curve))
    }

    /// Creates the pool with an explicit fee, or returns the existing pool
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both tokens share an address.
    /// - [`AmmError::InvalidFee`] if `fee` is 100% or more.
    pub fn create_pool_with_fee(
        &self,
        token_a: Token,
        token_b: Token,
        curve: CurveKind,
        fee: BasisPoints,
    ) -> Result<Arc<PoolHandle>> {
        let pair = TokenPair::new(token_a, token_b)?;
        let pool = LiquidityPool::new(pair, curve, fee)?;
        let key = pool.key();

        let mut pools = self.pools.write();
        if let Some(existing) = pools.get(&key) {
            debug!(pool = %existing.id(), "pool already registered");
            return Ok(Arc::clone(existing));
        }
        let handle = Arc::new(PoolHandle::new(pool, self.config.lock_timeout()));
        info!(pool = %handle.id(), key = %key, fee = %fee, "pool created");
        pools.insert(key, Arc::clone(&handle));
        Ok(handle)
    }

    /// Looks up an existing pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `a == b`.
    /// - [`AmmError::PathResolutionError`] if no such pool is registered.
    pub fn resolve_pool(
        &self,
        a: TokenAddress,
        b: TokenAddress,
        curve: CurveKind,
    ) -> Result<Arc<PoolHandle>> {
        let key = PoolKey::new(a, b, curve)?;
        self.resolve_key(&key)
    }

    pub(crate) fn resolve_key(&self, key: &PoolKey) -> Result<Arc<PoolHandle>> {
        self.pools
            .read()
            .get(key)
            .cloned()
            .ok_or(AmmError::PathResolutionError)
    }

    /// Identifier the pool for `(a, b, curve)` has or would have.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `a == b`.
    pub fn pool_id(&self, a: TokenAddress, b: TokenAddress, curve: CurveKind) -> Result<PoolId> {
        Ok(PoolKey::new(a, b, curve)?.id())
    }

    /// Looks up a pool by its identifier.
    #[must_use]
    pub fn pool_by_id(&self, id: PoolId) -> Option<Arc<PoolHandle>> {
        self.pools
            .read()
            .values()
            .find(|handle| handle.id() == id)
            .cloned()
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// All registered pools in key order.
    #[must_use]
    pub fn pools(&self) -> Vec<Arc<PoolHandle>> {
        self.pools.read().values().cloned().collect()
    }
}
