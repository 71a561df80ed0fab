//! Engine-wide configuration.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, CurveKind};
use crate::error::AmmError;

/// Default bounded wait for a pool lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(50);

/// Default constant-product fee: 30 bp.
pub const DEFAULT_CONSTANT_PRODUCT_FEE: BasisPoints = BasisPoints::new(30);

/// Default stable-swap fee: 1 bp.
pub const DEFAULT_STABLE_SWAP_FEE: BasisPoints = BasisPoints::new(1);

/// Parameters shared by the registry and router.
///
/// - `lock_timeout`: how long an operation waits for each pool lock before
///   failing with [`AmmError::Busy`].
/// - `constant_product_fee` / `stable_swap_fee`: the fee a newly created
///   pool of that curve gets when no explicit fee is given.
///
/// # Validation
///
/// - `lock_timeout` must be non-zero.
/// - Both fees must be below 10 000 bp.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use hydra_dex::config::EngineConfig;
/// use hydra_dex::domain::{BasisPoints, CurveKind};
///
/// let config = EngineConfig::default()
///     .with_lock_timeout(Duration::from_millis(5))
///     .with_stable_swap_fee(BasisPoints::new(4));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.fee_for(CurveKind::StableSwap), BasisPoints::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    lock_timeout: Duration,
    constant_product_fee: BasisPoints,
    stable_swap_fee: BasisPoints,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            constant_product_fee: DEFAULT_CONSTANT_PRODUCT_FEE,
            stable_swap_fee: DEFAULT_STABLE_SWAP_FEE,
        }
    }
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        lock_timeout: Duration,
        constant_product_fee: BasisPoints,
        stable_swap_fee: BasisPoints,
    ) -> Result<Self, AmmError> {
        let config = Self {
            lock_timeout,
            constant_product_fee,
            stable_swap_fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `lock_timeout` is zero.
    /// - [`AmmError::InvalidFee`] if a default fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.lock_timeout.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "lock_timeout must be non-zero",
            ));
        }
        if !self.constant_product_fee.is_valid_fee() {
            return Err(AmmError::InvalidFee(
                "constant-product fee must be below 10000 bps",
            ));
        }
        if !self.stable_swap_fee.is_valid_fee() {
            return Err(AmmError::InvalidFee(
                "stable-swap fee must be below 10000 bps",
            ));
        }
        Ok(())
    }

    /// Sets the lock timeout.
    #[must_use]
    pub const fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    /// Sets the default constant-product fee.
    #[must_use]
    pub const fn with_constant_product_fee(mut self, fee: BasisPoints) -> Self {
        self.constant_product_fee = fee;
        self
    }

    /// Sets the default stable-swap fee.
    #[must_use]
    pub const fn with_stable_swap_fee(mut self, fee: BasisPoints) -> Self {
        self.stable_swap_fee = fee;
        self
    }

    /// Returns the lock timeout.
    #[must_use]
    pub const fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Returns the default constant-product fee.
    #[must_use]
    pub const fn constant_product_fee(&self) -> BasisPoints {
        self.constant_product_fee
    }

    /// Returns the default stable-swap fee.
    #[must_use]
    pub const fn stable_swap_fee(&self) -> BasisPoints {
        self.stable_swap_fee
    }

    /// Default fee for a newly created pool of `curve`.
    #[must_use]
    pub const fn fee_for(&self, curve: CurveKind) -> BasisPoints {
        match curve {
            CurveKind::ConstantProduct => self.constant_product_fee,
            CurveKind::StableSwap => self.stable_swap_fee,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.lock_timeout(), Duration::from_millis(50));
        assert_eq!(config.fee_for(CurveKind::ConstantProduct), BasisPoints::new(30));
        assert_eq!(config.fee_for(CurveKind::StableSwap), BasisPoints::new(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let Err(e) = EngineConfig::new(
            Duration::ZERO,
            DEFAULT_CONSTANT_PRODUCT_FEE,
            DEFAULT_STABLE_SWAP_FEE,
        ) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            AmmError::InvalidConfiguration("lock_timeout must be non-zero")
        );
    }

    #[test]
    fn full_fee_rejected() {
        let result = EngineConfig::new(
            DEFAULT_LOCK_TIMEOUT,
            BasisPoints::new(10_000),
            DEFAULT_STABLE_SWAP_FEE,
        );
        assert!(matches!(result, Err(AmmError::InvalidFee(_))));

        let config = EngineConfig::default().with_stable_swap_fee(BasisPoints::new(20_000));
        assert!(matches!(config.validate(), Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn builder_setters() {
        let config = EngineConfig::default()
            .with_lock_timeout(Duration::from_secs(1))
            .with_constant_product_fee(BasisPoints::new(5));
        assert_eq!(config.lock_timeout(), Duration::from_secs(1));
        assert_eq!(config.constant_product_fee(), BasisPoints::new(5));
        assert_eq!(config.stable_swap_fee(), DEFAULT_STABLE_SWAP_FEE);
    }

    #[test]
    fn serde_round_trip() {
        let config = EngineConfig::default().with_stable_swap_fee(BasisPoints::new(4));
        let Ok(json) = serde_json::to_string(&config) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<EngineConfig>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(back, config);
    }
}
