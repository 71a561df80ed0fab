//! Two-asset liquidity pool.
//!
//! # Swap algorithm (exact input)
//!
//! 1. `net = floor(amount_in × (10 000 − fee_bps) / 10 000)`, `fee = amount_in − net`
//! 2. `amount_out` from the pool's curve for `net`
//! 3. reject `amount_out == 0` or `amount_out >= reserve_out`
//! 4. `reserve_in += amount_in` (the fee stays in the pool), `reserve_out -= amount_out`
//! 5. reject if the invariant of the new reserves is below the old one
//!
//! # Liquidity
//!
//! The first mint issues `sqrt(a × b) − MINIMUM_LIQUIDITY` shares and
//! locks [`MINIMUM_LIQUIDITY`] forever. Later mints issue the smaller of
//! the two proportional share counts and consume, rounding up, only what
//! those shares are worth. Burns pay out `floor(reserve × shares / total)`.
//!
//! Every mutating method computes the complete next state first and
//! assigns it only after all checks pass, so an `Err` leaves the pool
//! untouched.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::curve;
use crate::domain::{
    Amount, BasisPoints, BurnResult, CurveKind, MintResult, PoolId, PoolKey, Rounding, Shares,
    SwapResult, Token, TokenAddress, TokenPair,
};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, mul_div_up, narrow, sqrt, CheckedArithmetic};

/// Shares permanently locked by the first mint.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// One pair's reserves and share supply under a fixed curve and fee.
///
/// # Example
///
/// ```rust
/// use hydra_dex::domain::{Amount, BasisPoints, CurveKind, Token, TokenAddress, TokenPair};
/// use hydra_dex::pool::LiquidityPool;
///
/// let alpha = Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]));
/// let beta = Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]));
/// let pair = TokenPair::new(alpha, beta).expect("distinct");
///
/// let mut pool = LiquidityPool::new(pair, CurveKind::ConstantProduct, BasisPoints::new(30))
///     .expect("valid fee");
/// let ten_thousand = Amount::new(10_000 * 10u128.pow(18));
/// pool.mint(ten_thousand, ten_thousand).expect("first mint");
///
/// let result = pool
///     .swap(alpha.address(), Amount::new(1_000 * 10u128.pow(18)))
///     .expect("swap ok");
/// assert_eq!(result.amount_out, Amount::new(906_610_893_880_149_131_581));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPool {
    key: PoolKey,
    pair: TokenPair,
    curve: CurveKind,
    fee: BasisPoints,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

/// A fully checked swap, not yet applied.
struct SwapPlan {
    result: SwapResult,
    a_to_b: bool,
    reserve_in: Amount,
    reserve_out: Amount,
}

impl LiquidityPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee` is 100% or more.
    pub fn new(pair: TokenPair, curve: CurveKind, fee: BasisPoints) -> Result<Self> {
        if !fee.is_valid_fee() {
            return Err(AmmError::InvalidFee("fee must be below 10000 bps"));
        }
        let key = PoolKey::new(pair.first().address(), pair.second().address(), curve)?;
        Ok(Self {
            key,
            pair,
            curve,
            fee,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
        })
    }

    /// The canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// The pricing curve.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        self.curve
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Reserve of the first token.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of the second token.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Both reserves in canonical order.
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Outstanding shares, including the locked minimum.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` before the first mint.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Registry key of this pool.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        self.key
    }

    /// Deterministic pool id, also the LP asset address.
    #[must_use]
    pub fn id(&self) -> PoolId {
        self.key().id()
    }

    /// Reserve held of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: TokenAddress) -> Result<Amount> {
        if self.pair.is_first(token) {
            Ok(self.reserve_a)
        } else if self.pair.contains(token) {
            Ok(self.reserve_b)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// `(reserve_in, reserve_out)` for a trade paying in `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    pub fn reserves_for(&self, token_in: TokenAddress) -> Result<(Amount, Amount)> {
        if self.pair.is_first(token_in) {
            Ok((self.reserve_a, self.reserve_b))
        } else if self.pair.contains(token_in) {
            Ok((self.reserve_b, self.reserve_a))
        } else {
            Err(AmmError::InvalidToken("token_in is not part of the pool pair"))
        }
    }

    /// Current curve invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] on an oversized
    /// intermediate.
    pub fn invariant(&self) -> Result<U256> {
        self.invariant_of(self.reserve_a, self.reserve_b)
    }

    fn invariant_of(&self, reserve_a: Amount, reserve_b: Amount) -> Result<U256> {
        curve::invariant(
            self.curve,
            (reserve_a, self.pair.first()),
            (reserve_b, self.pair.second()),
        )
    }

    // -- swap ----------------------------------------------------------------

    /// Output a swap of `amount_in` of `token_in` would pay, without
    /// mutating the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn quote_out(&self, token_in: TokenAddress, amount_in: Amount) -> Result<Amount> {
        self.plan_swap(token_in, amount_in)
            .map(|plan| plan.result.amount_out)
    }

    /// Full result of a swap, without mutating the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap).
    pub fn preview_swap(&self, token_in: TokenAddress, amount_in: Amount) -> Result<SwapResult> {
        self.plan_swap(token_in, amount_in).map(|plan| plan.result)
    }

    /// Swaps an exact `amount_in` of `token_in` for the other token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is zero or the
    ///   output rounds to zero or would drain the output reserve.
    /// - [`AmmError::InvariantViolation`] if the new reserves would lower
    ///   the curve invariant.
    /// - [`AmmError::ArithmeticOverflow`] on overflow.
    pub fn swap(&mut self, token_in: TokenAddress, amount_in: Amount) -> Result<SwapResult> {
        let plan = self.plan_swap(token_in, amount_in)?;
        if plan.a_to_b {
            self.reserve_a = plan.reserve_in;
            self.reserve_b = plan.reserve_out;
        } else {
            self.reserve_b = plan.reserve_in;
            self.reserve_a = plan.reserve_out;
        }
        Ok(plan.result)
    }

    fn plan_swap(&self, token_in: TokenAddress, amount_in: Amount) -> Result<SwapPlan> {
        let (reserve_in, reserve_out) = self.reserves_for(token_in)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let a_to_b = self.pair.is_first(token_in);
        let (token_in, token_out) = if a_to_b {
            (self.pair.first(), self.pair.second())
        } else {
            (self.pair.second(), self.pair.first())
        };

        let net_in = self.fee.complement().apply(amount_in, Rounding::Down)?;
        let fee = amount_in.safe_sub(&net_in)?;

        let amount_out = curve::amount_out(
            self.curve,
            net_in,
            (reserve_in, token_in),
            (reserve_out, token_out),
        )?;
        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }

        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;

        let (before, after) = if a_to_b {
            (
                self.invariant_of(reserve_in, reserve_out)?,
                self.invariant_of(new_in, new_out)?,
            )
        } else {
            (
                self.invariant_of(reserve_out, reserve_in)?,
                self.invariant_of(new_out, new_in)?,
            )
        };
        if after < before {
            warn!(
                pool = %self.id(),
                %amount_in,
                %amount_out,
                "swap would decrease the curve invariant"
            );
            return Err(AmmError::InvariantViolation("swap decreased the curve invariant"));
        }

        Ok(SwapPlan {
            result: SwapResult {
                amount_in,
                amount_out,
                fee,
            },
            a_to_b,
            reserve_in: new_in,
            reserve_out: new_out,
        })
    }

    // -- liquidity -----------------------------------------------------------

    /// What [`mint`](Self::mint) would issue and consume, without mutating
    /// the pool.
    ///
    /// # Errors
    ///
    /// Same as [`mint`](Self::mint).
    pub fn preview_mint(&self, amount_a: Amount, amount_b: Amount) -> Result<MintResult> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        if self.is_empty() {
            let product = U256::from(amount_a.get()) * U256::from(amount_b.get());
            let root = Shares::new(narrow(sqrt(product), "initial shares exceed u128")?);
            if root <= MINIMUM_LIQUIDITY {
                return Err(AmmError::InsufficientInitialLiquidity);
            }
            return Ok(MintResult {
                amount_a,
                amount_b,
                shares: root.safe_sub(&MINIMUM_LIQUIDITY)?,
                locked: MINIMUM_LIQUIDITY,
            });
        }

        let total = self.total_shares.get();
        let by_a = mul_div(amount_a.get(), total, self.reserve_a.get())?;
        let by_b = mul_div(amount_b.get(), total, self.reserve_b.get())?;
        let shares = by_a.min(by_b);
        if shares == 0 {
            return Err(AmmError::InsufficientLiquidity);
        }

        // consumption rounds up in the pool's favour, capped at what was supplied
        let used_a = mul_div_up(shares, self.reserve_a.get(), total)?;
        let used_b = mul_div_up(shares, self.reserve_b.get(), total)?;
        Ok(MintResult {
            amount_a: Amount::new(used_a).min(amount_a),
            amount_b: Amount::new(used_b).min(amount_b),
            shares: Shares::new(shares),
            locked: Shares::ZERO,
        })
    }

    /// Deposits up to `amount_a`/`amount_b` (canonical order) and issues
    /// shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit does
    ///   not exceed the locked minimum.
    /// - [`AmmError::InsufficientLiquidity`] if a later deposit is worth
    ///   zero shares.
    /// - [`AmmError::ArithmeticOverflow`] on overflow.
    pub fn mint(&mut self, amount_a: Amount, amount_b: Amount) -> Result<MintResult> {
        let result = self.preview_mint(amount_a, amount_b)?;
        let reserve_a = self.reserve_a.safe_add(&result.amount_a)?;
        let reserve_b = self.reserve_b.safe_add(&result.amount_b)?;
        let total_shares = self
            .total_shares
            .safe_add(&result.shares)?
            .safe_add(&result.locked)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        Ok(result)
    }

    /// What [`burn`](Self::burn) would pay out, without mutating the pool.
    ///
    /// # Errors
    ///
    /// Same as [`burn`](Self::burn).
    pub fn preview_burn(&self, shares: Shares) -> Result<BurnResult> {
        if shares.is_zero() || shares > self.total_shares {
            return Err(AmmError::InsufficientShares);
        }
        let total = self.total_shares.get();
        let amount_a = Amount::new(mul_div(self.reserve_a.get(), shares.get(), total)?);
        let amount_b = Amount::new(mul_div(self.reserve_b.get(), shares.get(), total)?);
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        Ok(BurnResult { amount_a, amount_b })
    }

    /// Burns `shares` and releases the proportional reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
    ///   the outstanding total.
    /// - [`AmmError::InsufficientLiquidity`] if both payouts round to zero.
    pub fn burn(&mut self, shares: Shares) -> Result<BurnResult> {
        let result = self.preview_burn(shares)?;
        let reserve_a = self.reserve_a.safe_sub(&result.amount_a)?;
        let reserve_b = self.reserve_b.safe_sub(&result.amount_b)?;
        let total_shares = self.total_shares.safe_sub(&shares)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_shares = total_shares;
        Ok(result)
    }

    /// The token of the pair at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `address` is not in the pair.
    pub fn token(&self, address: TokenAddress) -> Result<Token> {
        self.pair.token(address)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;
    use crate::math::WAD;

    fn alpha() -> Token {
        Token::with_wad_decimals(TokenAddress::from_bytes([1u8; 32]))
    }

    fn beta() -> Token {
        Token::with_wad_decimals(TokenAddress::from_bytes([2u8; 32]))
    }

    fn tokens(n: u128) -> Amount {
        Amount::new(n * WAD)
    }

    fn seeded(curve: CurveKind, fee: u32, ra: Amount, rb: Amount) -> LiquidityPool {
        let Ok(pair) = TokenPair::new(alpha(), beta()) else {
            panic!("valid pair");
        };
        let Ok(mut pool) = LiquidityPool::new(pair, curve, BasisPoints::new(fee)) else {
            panic!("valid pool");
        };
        let Ok(_) = pool.mint(ra, rb) else {
            panic!("first mint");
        };
        pool
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn rejects_full_fee() {
        let Ok(pair) = TokenPair::new(alpha(), beta()) else {
            panic!("valid pair");
        };
        let Err(e) = LiquidityPool::new(pair, CurveKind::ConstantProduct, BasisPoints::new(10_000))
        else {
            panic!("expected Err");
        };
        assert!(matches!(e, AmmError::InvalidFee(_)));
    }

    #[test]
    fn empty_pool_is_inert() {
        let Ok(pair) = TokenPair::new(alpha(), beta()) else {
            panic!("valid pair");
        };
        let Ok(mut pool) = LiquidityPool::new(pair, CurveKind::StableSwap, BasisPoints::new(1))
        else {
            panic!("valid pool");
        };
        assert!(pool.is_empty());
        assert_eq!(
            pool.quote_out(alpha().address(), tokens(1)),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            pool.swap(alpha().address(), tokens(1)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    // -- mint ----------------------------------------------------------------

    #[test]
    fn first_mint_locks_minimum() {
        let pool = seeded(CurveKind::ConstantProduct, 30, tokens(10_000), tokens(10_000));
        assert_eq!(pool.total_shares(), Shares::new(10_000 * WAD));
        assert_eq!(pool.reserves(), (tokens(10_000), tokens(10_000)));

        let Ok(pair) = TokenPair::new(alpha(), beta()) else {
            panic!("valid pair");
        };
        let Ok(mut fresh) = LiquidityPool::new(pair, CurveKind::ConstantProduct, BasisPoints::new(30))
        else {
            panic!("valid pool");
        };
        let Ok(result) = fresh.mint(tokens(10_000), tokens(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.shares, Shares::new(9_999_999_999_999_999_999_000));
        assert_eq!(result.locked, MINIMUM_LIQUIDITY);
    }

    #[test]
    fn first_mint_below_minimum_fails() {
        let Ok(pair) = TokenPair::new(alpha(), beta()) else {
            panic!("valid pair");
        };
        let Ok(mut pool) = LiquidityPool::new(pair, CurveKind::ConstantProduct, BasisPoints::new(30))
        else {
            panic!("valid pool");
        };
        assert_eq!(
            pool.mint(Amount::new(1_000), Amount::new(1_000)),
            Err(AmmError::InsufficientInitialLiquidity)
        );
        assert!(pool.is_empty());
        assert_eq!(pool.mint(Amount::ZERO, tokens(1)), Err(AmmError::ZeroAmount));
    }

    #[test]
    fn later_mint_takes_smaller_share_and_consumes_what_it_is_worth() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(100), tokens(200));
        let Ok(result) = pool.mint(tokens(10), tokens(50)) else {
            panic!("expected Ok");
        };
        // 10 alpha buys 10% of the supply; only 20 beta are needed for that
        assert_eq!(result.amount_a, tokens(10));
        assert_eq!(result.amount_b, tokens(20));
        assert_eq!(result.locked, Shares::ZERO);
        assert_eq!(pool.reserves(), (tokens(110), tokens(220)));
    }

    #[test]
    fn dust_mint_is_rejected_without_side_effects() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(10_000), Amount::new(2_000));
        let before = pool.clone();
        assert_eq!(
            pool.mint(Amount::new(1), Amount::new(1)),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(pool, before);
    }

    // -- burn ----------------------------------------------------------------

    #[test]
    fn burn_all_user_shares() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(1_000), tokens(1_000));
        let Ok(result) = pool.burn(Shares::new(999_999_999_999_999_999_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_a, Amount::new(999_999_999_999_999_999_000));
        assert_eq!(result.amount_b, Amount::new(999_999_999_999_999_999_000));
        assert_eq!(pool.total_shares(), MINIMUM_LIQUIDITY);
        assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(1_000)));
    }

    #[test]
    fn burn_rejects_zero_and_excess() {
        let mut pool = seeded(CurveKind::StableSwap, 1, tokens(10), tokens(10));
        assert_eq!(pool.burn(Shares::ZERO), Err(AmmError::InsufficientShares));
        let excess = Shares::new(pool.total_shares().get() + 1);
        assert_eq!(pool.burn(excess), Err(AmmError::InsufficientShares));
    }

    // -- swap ----------------------------------------------------------------

    #[test]
    fn constant_product_fixture() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(10_000), tokens(10_000));
        let Ok(result) = pool.swap(alpha().address(), tokens(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out, Amount::new(906_610_893_880_149_131_581));
        assert_eq!(result.fee, tokens(3));
        assert_eq!(pool.reserve_a(), tokens(11_000));
        assert_eq!(pool.reserve_b(), Amount::new(9_093_389_106_119_850_868_419));
    }

    #[test]
    fn constant_product_one_basis_point_fixture() {
        let pool = seeded(CurveKind::ConstantProduct, 1, tokens(10_000), tokens(10_000));
        assert_eq!(
            pool.quote_out(alpha().address(), tokens(1_000)),
            Ok(Amount::new(909_008_263_711_488_286_257))
        );
    }

    #[test]
    fn stable_fixture_beats_constant_product() {
        let mut pool = seeded(CurveKind::StableSwap, 1, tokens(10_000), tokens(10_000));
        let Ok(result) = pool.swap(beta().address(), tokens(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out, Amount::new(999_400_717_612_255_192_286));
        assert_eq!(result.fee, Amount::new(100_000_000_000_000_000));
        assert_eq!(pool.reserve_b(), tokens(11_000));
        assert_eq!(pool.reserve_a(), Amount::new(9_000_599_282_387_744_807_714));
    }

    #[test]
    fn stable_fixtures_across_fees() {
        for (fee, expected) in [
            (4, 999_101_316_071_275_857_143u128),
            (30, 996_506_480_231_247_732_537u128),
        ] {
            let pool = seeded(CurveKind::StableSwap, fee, tokens(10_000), tokens(10_000));
            assert_eq!(
                pool.quote_out(alpha().address(), tokens(1_000)),
                Ok(Amount::new(expected))
            );
        }
    }

    #[test]
    fn zero_fee_stable_single_wei_keeps_invariant() {
        let mut pool = seeded(CurveKind::StableSwap, 0, tokens(1), tokens(9_999));
        let Ok(before) = pool.invariant() else {
            panic!("expected Ok");
        };
        let Ok(result) = pool.swap(alpha().address(), Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out, Amount::new(3_332));
        let Ok(after) = pool.invariant() else {
            panic!("expected Ok");
        };
        assert!(after >= before);
    }

    #[test]
    fn stable_mixed_decimals() {
        let Ok(six) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let usdc = Token::new(TokenAddress::from_bytes([3u8; 32]), six);
        let Ok(pair) = TokenPair::new(usdc, beta()) else {
            panic!("valid pair");
        };
        let Ok(mut pool) = LiquidityPool::new(pair, CurveKind::StableSwap, BasisPoints::new(1))
        else {
            panic!("valid pool");
        };
        // beta sorts before the 0x03.. address, so amounts are (beta, usdc)
        let Ok(_) = pool.mint(tokens(10_000), Amount::new(10_000_000_000)) else {
            panic!("first mint");
        };
        assert_eq!(
            pool.quote_out(usdc.address(), Amount::new(1_000_000_000)),
            Ok(Amount::new(999_400_717_612_255_192_286))
        );
        assert_eq!(
            pool.quote_out(beta().address(), tokens(1_000)),
            Ok(Amount::new(999_400_717))
        );
    }

    #[test]
    fn swap_rejects_foreign_token_and_zero() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(10), tokens(10));
        let stranger = TokenAddress::from_bytes([9u8; 32]);
        assert!(matches!(
            pool.swap(stranger, tokens(1)),
            Err(AmmError::InvalidToken(_))
        ));
        assert_eq!(
            pool.swap(alpha().address(), Amount::ZERO),
            Err(AmmError::ZeroAmount)
        );
    }

    #[test]
    fn dust_swap_is_insufficient_liquidity() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(10_000), tokens(10_000));
        let before = pool.clone();
        assert_eq!(
            pool.swap(alpha().address(), Amount::new(1)),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn quote_matches_swap_and_does_not_mutate() {
        let mut pool = seeded(CurveKind::StableSwap, 4, tokens(5_000), tokens(7_000));
        let before = pool.clone();
        let Ok(quoted) = pool.quote_out(beta().address(), tokens(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(pool, before);
        let Ok(result) = pool.swap(beta().address(), tokens(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out, quoted);
    }

    #[test]
    fn invariant_grows_with_fees() {
        let mut pool = seeded(CurveKind::ConstantProduct, 30, tokens(10_000), tokens(10_000));
        let Ok(before) = pool.invariant() else {
            panic!("expected Ok");
        };
        let Ok(_) = pool.swap(alpha().address(), tokens(1_000)) else {
            panic!("expected Ok");
        };
        let Ok(after) = pool.invariant() else {
            panic!("expected Ok");
        };
        assert!(after > before);
    }

    #[test]
    fn reserve_lookup() {
        let pool = seeded(CurveKind::ConstantProduct, 30, tokens(1), tokens(2));
        assert_eq!(pool.reserve_of(beta().address()), Ok(tokens(2)));
        assert_eq!(pool.reserves_for(beta().address()), Ok((tokens(2), tokens(1))));
        assert!(pool.reserve_of(TokenAddress::from_bytes([7u8; 32])).is_err());
    }
}
