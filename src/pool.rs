// Simulated SOL/ILHAM liquidity position. Validates against wallet balances
// supplied by the caller but does not debit them; shares and fees are purely
// simulated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated DEX fee rate per unit of volume.
pub const POOL_FEE_RATE: f64 = 0.003;
/// Stand-in for the rest of the pool when computing the user's fee share.
const SIMULATED_POOL_SHARES: f64 = 10_000.0;
const SHARE_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("amounts must be positive")]
    InvalidAmount,
    #[error("insufficient SOL balance")]
    InsufficientSol,
    #[error("insufficient token balance")]
    InsufficientTokens,
    #[error("no liquidity to withdraw")]
    NoLiquidity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiquidityPool {
    shares: f64,
    fees_earned: f64,
}

impl LiquidityPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shares(&self) -> f64 {
        self.shares
    }

    pub fn fees_earned(&self) -> f64 {
        self.fees_earned
    }

    /// Add liquidity. Shares granted are the geometric mean of the two legs,
    /// scaled; returns the grant.
    pub fn provide(
        &mut self,
        sol_amount: f64,
        token_amount: u64,
        sol_available: f64,
        token_available: u64,
    ) -> Result<f64, PoolError> {
        if !sol_amount.is_finite() || sol_amount <= 0.0 || token_amount == 0 {
            return Err(PoolError::InvalidAmount);
        }
        if sol_amount > sol_available {
            return Err(PoolError::InsufficientSol);
        }
        if token_amount > token_available {
            return Err(PoolError::InsufficientTokens);
        }
        let granted = (sol_amount * token_amount as f64).sqrt() * SHARE_SCALE;
        self.shares += granted;
        Ok(granted)
    }

    /// Fee accrual for one simulated volume tick; no-op with no position.
    /// The user's cut is `shares / (shares + SIMULATED_POOL_SHARES)`.
    pub fn accrue(&mut self, volume: f64) -> f64 {
        if self.shares <= 0.0 {
            return 0.0;
        }
        let user_share = self.shares / (self.shares + SIMULATED_POOL_SHARES);
        let fees = volume * POOL_FEE_RATE * user_share;
        self.fees_earned += fees;
        fees
    }

    /// Redeem the entire position: returns (shares, fees) and zeroes both.
    pub fn withdraw_all(&mut self) -> Result<(f64, f64), PoolError> {
        if self.shares <= 0.0 {
            return Err(PoolError::NoLiquidity);
        }
        let out = (self.shares, self.fees_earned);
        self.shares = 0.0;
        self.fees_earned = 0.0;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provide_grants_geometric_mean_shares() {
        let mut pool = LiquidityPool::new();
        // sqrt(1.0 * 100) * 100 = 1000
        let granted = pool.provide(1.0, 100, 2.0, 500).expect("provide");
        assert!((granted - 1_000.0).abs() < 1e-9);
        assert!((pool.shares() - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn provide_validates_against_wallet_balances() {
        let mut pool = LiquidityPool::new();
        assert_eq!(pool.provide(3.0, 100, 2.0, 500), Err(PoolError::InsufficientSol));
        assert_eq!(pool.provide(1.0, 600, 2.0, 500), Err(PoolError::InsufficientTokens));
        assert_eq!(pool.provide(0.0, 100, 2.0, 500), Err(PoolError::InvalidAmount));
        assert_eq!(pool.provide(1.0, 0, 2.0, 500), Err(PoolError::InvalidAmount));
        assert_eq!(pool.shares(), 0.0, "no shares granted on failure");
    }

    #[test]
    fn accrue_without_position_is_noop() {
        let mut pool = LiquidityPool::new();
        assert_eq!(pool.accrue(100.0), 0.0);
        assert_eq!(pool.fees_earned(), 0.0);
    }

    #[test]
    fn accrue_pays_proportional_cut() {
        let mut pool = LiquidityPool::new();
        pool.provide(1.0, 100, 2.0, 500).expect("provide");
        // user share = 1000 / 11000; fees = 100 * 0.003 * that
        let fees = pool.accrue(100.0);
        let expected = 100.0 * POOL_FEE_RATE * (1_000.0 / 11_000.0);
        assert!((fees - expected).abs() < 1e-12);
        assert!((pool.fees_earned() - expected).abs() < 1e-12);
    }

    #[test]
    fn withdraw_all_resets_position() {
        let mut pool = LiquidityPool::new();
        pool.provide(1.0, 100, 2.0, 500).expect("provide");
        pool.accrue(50.0);
        let (shares, fees) = pool.withdraw_all().expect("withdraw");
        assert!(shares > 0.0);
        assert!(fees > 0.0);
        assert_eq!(pool.shares(), 0.0);
        assert_eq!(pool.fees_earned(), 0.0);
        assert_eq!(pool.withdraw_all(), Err(PoolError::NoLiquidity));
    }
}
