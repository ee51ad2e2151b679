// Wallet ledger state machine: single session, deterministic, in-memory.
// Every operation is a complete transition: validate first, then mutate and
// append exactly one log entry. Failed operations leave state untouched.

use crate::ids;
use crate::tx::{Transaction, TxKind, TxStatus};
use crate::{REWARD_COOLDOWN_MS, SWAP_RATE, TOKEN_SYMBOL};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Reward per eligible claim: floor(staked / 100), i.e. 1%.
const REWARD_DIVISOR: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("wallet already connected")]
    AlreadyConnected,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("transfer recipient is required")]
    MissingRecipient,
    #[error("insufficient SOL balance")]
    InsufficientSol,
    #[error("insufficient token balance")]
    InsufficientTokens,
    #[error("insufficient staked balance")]
    InsufficientStake,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Present only while connected.
    address: Option<String>,
    sol_balance: f64,
    token_balance: u64,
    staked_balance: u64,
    /// Set on first stake; cleared on disconnect.
    last_reward_claim_ms: Option<u64>,
    /// Newest-first.
    transactions: VecDeque<Transaction>,
    tx_seq: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read side ---

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn sol_balance(&self) -> f64 {
        self.sol_balance
    }

    pub fn token_balance(&self) -> u64 {
        self.token_balance
    }

    pub fn staked_balance(&self) -> u64 {
        self.staked_balance
    }

    pub fn last_reward_claim_ms(&self) -> Option<u64> {
        self.last_reward_claim_ms
    }

    /// Governance weight: available plus staked tokens.
    pub fn voting_power(&self) -> u64 {
        self.token_balance.saturating_add(self.staked_balance)
    }

    /// Log entries, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.transactions.front()
    }

    /// Pure function of (now, last claim, staked balance); false at zero
    /// stake, true when the timer is unset or the cooldown has elapsed.
    pub fn can_claim_reward(&self, now_ms: u64) -> bool {
        if self.staked_balance == 0 {
            return false;
        }
        match self.last_reward_claim_ms {
            None => true,
            Some(t) => now_ms.saturating_sub(t) >= REWARD_COOLDOWN_MS,
        }
    }

    // --- Operations ---

    /// Start a session: fresh address, zeroed balances, empty log.
    pub fn connect<R: Rng>(&mut self, rng: &mut R) -> Result<String, LedgerError> {
        if self.address.is_some() {
            return Err(LedgerError::AlreadyConnected);
        }
        *self = Ledger::new();
        let address = ids::wallet_address(rng);
        self.address = Some(address.clone());
        Ok(address)
    }

    /// End the session: clears address, balances, log, and the reward timer.
    pub fn disconnect(&mut self) {
        *self = Ledger::new();
    }

    /// Faucet: +1 SOL, always succeeds.
    pub fn airdrop_sol(&mut self, now_ms: u64) -> String {
        self.sol_balance += 1.0;
        self.record(TxKind::Airdrop, 1.0, "SOL Airdrop".to_string(), now_ms)
    }

    pub fn mint_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        self.token_balance = self.token_balance.saturating_add(amount);
        let details = format!("Minted {} {}", amount, TOKEN_SYMBOL);
        Ok(self.record(TxKind::Mint, amount as f64, details, now_ms))
    }

    pub fn transfer_tokens(
        &mut self,
        recipient: &str,
        amount: u64,
        now_ms: u64,
    ) -> Result<String, LedgerError> {
        if recipient.trim().is_empty() {
            return Err(LedgerError::MissingRecipient);
        }
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.token_balance {
            return Err(LedgerError::InsufficientTokens);
        }
        self.token_balance -= amount;
        let short: String = recipient.chars().take(8).collect();
        let details = format!("Sent to {}...", short);
        Ok(self.record(TxKind::Transfer, amount as f64, details, now_ms))
    }

    /// Fixed-rate swap, 1 SOL = `SWAP_RATE` tokens. Token credit is floored
    /// to keep the token balance integral; logged amount is the token credit.
    /// Dust inputs whose floored credit is zero are rejected outright so no
    /// SOL is ever debited for nothing.
    pub fn swap_sol_to_token(&mut self, sol_amount: f64, now_ms: u64) -> Result<String, LedgerError> {
        if !sol_amount.is_finite() || sol_amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        if sol_amount > self.sol_balance {
            return Err(LedgerError::InsufficientSol);
        }
        let tokens_out = (sol_amount * SWAP_RATE as f64).floor() as u64;
        if tokens_out == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        // max(0) guards float residue when draining the balance exactly.
        self.sol_balance = (self.sol_balance - sol_amount).max(0.0);
        self.token_balance = self.token_balance.saturating_add(tokens_out);
        let details = format!("Swapped {} SOL -> {} {}", sol_amount, tokens_out, TOKEN_SYMBOL);
        Ok(self.record(TxKind::Swap, tokens_out as f64, details, now_ms))
    }

    /// Locks tokens into the staked balance. The reward timer starts on the
    /// first stake of the session and is never restarted by later stakes.
    pub fn stake_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.token_balance {
            return Err(LedgerError::InsufficientTokens);
        }
        self.token_balance -= amount;
        self.staked_balance = self.staked_balance.saturating_add(amount);
        if self.last_reward_claim_ms.is_none() {
            self.last_reward_claim_ms = Some(now_ms);
        }
        let details = format!("Staked {} {}", amount, TOKEN_SYMBOL);
        Ok(self.record(TxKind::Stake, amount as f64, details, now_ms))
    }

    pub fn unstake_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.staked_balance {
            return Err(LedgerError::InsufficientStake);
        }
        self.staked_balance -= amount;
        self.token_balance = self.token_balance.saturating_add(amount);
        let details = format!("Unstaked {} {}", amount, TOKEN_SYMBOL);
        Ok(self.record(TxKind::Unstake, amount as f64, details, now_ms))
    }

    /// Silently a no-op when ineligible. On an eligible claim the cooldown
    /// restarts even when the floored payout is zero (staked < 100).
    pub fn claim_rewards(&mut self, now_ms: u64) -> Option<String> {
        if !self.can_claim_reward(now_ms) {
            return None;
        }
        let reward = self.staked_balance / REWARD_DIVISOR;
        let mut id = None;
        if reward > 0 {
            self.token_balance = self.token_balance.saturating_add(reward);
            id = Some(self.record(
                TxKind::Reward,
                reward as f64,
                "Claimed staking reward".to_string(),
                now_ms,
            ));
        }
        self.last_reward_claim_ms = Some(now_ms);
        id
    }

    /// Irreversible supply reduction from the available balance.
    pub fn burn_tokens(&mut self, amount: u64, now_ms: u64) -> Result<String, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.token_balance {
            return Err(LedgerError::InsufficientTokens);
        }
        self.token_balance -= amount;
        let details = format!("Burned {} {}", amount, TOKEN_SYMBOL);
        Ok(self.record(TxKind::Burn, amount as f64, details, now_ms))
    }

    fn record(&mut self, kind: TxKind, amount: f64, details: String, now_ms: u64) -> String {
        let id = ids::tx_id(now_ms, self.tx_seq);
        self.tx_seq += 1;
        self.transactions.push_front(Transaction {
            id: id.clone(),
            kind,
            amount,
            timestamp_ms: now_ms,
            status: TxStatus::Success,
            details,
        });
        id
    }
}
