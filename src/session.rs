// Owning container for one simulated session: ledger, governance board,
// liquidity position, alert book, and price feed behind a single seeded rng.
// No ambient globals; consumers hold the Session and pass it by reference.

use crate::alerts::{AlertBook, AlertDirection, AlertError, PriceAlert};
use crate::governance::{GovernanceBoard, GovernanceError, Proposal, VoteChoice};
use crate::ledger::{Ledger, LedgerError};
use crate::market::PriceFeed;
use crate::pool::{LiquidityPool, PoolError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated trade volume per tick is drawn from [0, TICK_VOLUME_MAX).
const TICK_VOLUME_MAX: f64 = 100.0;

/// Snapshot produced by one periodic tick. The caller decides the cadence;
/// a UI would typically re-evaluate every second.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub can_claim_reward: bool,
    pub price: f64,
    pub fees_accrued: f64,
    pub triggered_alerts: Vec<String>,
}

#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    governance: GovernanceBoard,
    pool: LiquidityPool,
    alerts: AlertBook,
    feed: PriceFeed,
    rng: StdRng,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            ledger: Ledger::new(),
            governance: GovernanceBoard::seeded(),
            pool: LiquidityPool::new(),
            alerts: AlertBook::new(),
            feed: PriceFeed::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // --- Read side ---

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn proposals(&self) -> &[Proposal] {
        self.governance.proposals()
    }

    pub fn pool(&self) -> &LiquidityPool {
        &self.pool
    }

    pub fn alerts(&self) -> &[PriceAlert] {
        self.alerts.alerts()
    }

    pub fn price(&self) -> f64 {
        self.feed.price()
    }

    // --- Wallet operations (ledger pass-through) ---

    pub fn connect(&mut self) -> Result<String, LedgerError> {
        self.ledger.connect(&mut self.rng)
    }

    pub fn disconnect(&mut self) {
        self.ledger.disconnect();
    }

    pub fn airdrop_sol(&mut self, now_ms: u64) -> String {
        self.ledger.airdrop_sol(now_ms)
    }

    pub fn mint_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        self.ledger.mint_tokens(amount, now_ms)
    }

    pub fn transfer_tokens(
        &mut self,
        recipient: &str,
        amount: u64,
        now_ms: u64,
    ) -> Result<String, LedgerError> {
        self.ledger.transfer_tokens(recipient, amount, now_ms)
    }

    pub fn swap_sol_to_token(&mut self, sol_amount: f64, now_ms: u64) -> Result<String, LedgerError> {
        self.ledger.swap_sol_to_token(sol_amount, now_ms)
    }

    pub fn stake_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        self.ledger.stake_tokens(amount, now_ms)
    }

    pub fn unstake_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        self.ledger.unstake_tokens(amount, now_ms)
    }

    pub fn claim_rewards(&mut self, now_ms: u64) -> Option<String> {
        self.ledger.claim_rewards(now_ms)
    }

    pub fn burn_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        self.ledger.burn_tokens(amount, now_ms)
    }

    // --- Governance / liquidity / alerts ---

    /// Voting power is derived from the ledger at call time.
    pub fn vote(&mut self, proposal_id: &str, choice: VoteChoice) -> Result<(), GovernanceError> {
        self.governance
            .vote(proposal_id, choice, self.ledger.voting_power())
    }

    pub fn provide_liquidity(&mut self, sol_amount: f64, token_amount: u64) -> Result<f64, PoolError> {
        self.pool.provide(
            sol_amount,
            token_amount,
            self.ledger.sol_balance(),
            self.ledger.token_balance(),
        )
    }

    pub fn withdraw_liquidity(&mut self) -> Result<(f64, f64), PoolError> {
        self.pool.withdraw_all()
    }

    pub fn add_alert(&mut self, target_price: f64, direction: AlertDirection) -> Result<String, AlertError> {
        self.alerts.add(target_price, direction)
    }

    pub fn remove_alert(&mut self, id: &str) -> bool {
        self.alerts.remove(id)
    }

    /// One periodic re-evaluation step: advance the price feed, accrue pool
    /// fees from a simulated volume draw, check alerts against the new
    /// price, and recompute the reward-claim signal. Never touches wallet
    /// balances.
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let price = self.feed.tick(&mut self.rng);
        let volume = self.rng.gen::<f64>() * TICK_VOLUME_MAX;
        let fees_accrued = self.pool.accrue(volume);
        let triggered_alerts = self.alerts.check(price);
        TickReport {
            can_claim_reward: self.ledger.can_claim_reward(now_ms),
            price,
            fees_accrued,
            triggered_alerts,
        }
    }
}
