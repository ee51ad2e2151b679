// Simulation core: deterministic, in-memory, session-scoped.

pub mod alerts;
pub mod governance;
pub mod ids;
pub mod ledger;
pub mod market;
pub mod pool;
pub mod session;
pub mod tx;

/// Token symbol used in human-readable transaction details.
pub const TOKEN_SYMBOL: &str = "ILHAM";

/// Fixed swap rate: 1 SOL buys this many tokens.
pub const SWAP_RATE: u64 = 100;

/// Minimum elapsed time between successful reward claims.
pub const REWARD_COOLDOWN_MS: u64 = 10_000;

// Time is injected as unix milliseconds; the core never reads the wall clock.
// Randomness is injected as &mut impl Rng where an operation needs it.

/*
Intentionally avoids:
- async
- threads
- global mutable state
- external IO
*/
