//! Roulette table execution.
//!
//! This module contains everything that runs a round of roulette:
//! - `GameRng`: seeded randomness for the wheel and randomized players
//! - `Wheel` / `BinBuilder`: the 38 bins and the outcomes paid by each
//! - `Table`: pending bets and the minimum/limit rules
//! - `Game`: one place/spin/resolve/notify cycle
//! - `player`: the betting strategies

mod bin_builder;
mod game;
pub mod player;
mod table;
mod wheel;

pub use bin_builder::BinBuilder;
pub use game::Game;
pub use player::{Player, Strategy, StrategyKind, UnknownStrategy};
pub use table::Table;
pub use wheel::Wheel;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use roulette_types::casino::BIN_COUNT;
use thiserror::Error;

/// Deterministic random number generator.
///
/// Wraps a ChaCha20 stream so the same seed always yields the same spins.
/// Every consumer owns its own instance; nothing reads ambient randomness.
#[derive(Clone)]
pub struct GameRng {
    inner: ChaCha20Rng,
}

impl GameRng {
    /// Create a new RNG from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
        }
    }

    /// Derive an independent stream seeded from this one.
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    /// Get a random u64 value.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Get a random value in range [0, max).
    pub fn next_bounded(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        self.inner.gen_range(0..max)
    }

    /// Spin the wheel (bin index 0-37, 37 is "00").
    pub fn spin_roulette(&mut self) -> usize {
        self.next_bounded(BIN_COUNT)
    }
}

/// A bet the table refuses.
///
/// Raised for a bet the owner cannot cover or one that breaks the table
/// minimum/limit. Nothing in the game loop recovers from it; the session that
/// produced it is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBet {
    #[error("bet of {amount} exceeds available stake {stake}")]
    InsufficientStake { amount: u64, stake: u64 },
    #[error("bet of {amount} is below the table minimum {minimum}")]
    BelowMinimum { amount: u64, minimum: u64 },
    #[error("bets totalling {total} exceed the table limit {limit}")]
    OverLimit { total: u64, limit: u64 },
}

/// A strategy was built against a wheel that lacks the outcome it bets on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wheel has no outcome named {name:?}")]
pub struct UnknownOutcome {
    pub name: String,
}
