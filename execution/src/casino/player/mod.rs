//! Players and their betting strategies.
//!
//! A `Player` owns the wallet (`stake`) and the round budget; a `Strategy`
//! decides what to bet and reacts to each resolved spin. Strategies are a
//! closed set of variants, each carrying its own state, dispatched through
//! the `BettingStrategy` trait:
//! - Passenger57: flat bet on black
//! - Martingale: double after every loss
//! - SevenReds: Martingale, only after seven reds in a row
//! - Fibonacci: bet follows the Fibonacci sequence while losing
//! - Cancellation: bet the ends of a sequence of units
//! - OneThreeTwoSix: 1-3-2-6 progression while winning
//! - RandomChoice: flat bet on a random outcome
//! - Idle: never plays

mod cancellation;
mod fibonacci;
mod martingale;
mod one_three_two_six;
mod passenger57;
mod random_choice;
mod seven_reds;

pub use cancellation::Cancellation;
pub use fibonacci::Fibonacci;
pub use martingale::Martingale;
pub use one_three_two_six::{OneThreeTwoSix, Progression, SpinResult};
pub use passenger57::Passenger57;
pub use random_choice::RandomChoice;
pub use seven_reds::SevenReds;

use super::{GameRng, InvalidBet, Table, UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Bin, Outcome, PlayerId};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Decisions a strategy makes over a session.
pub trait BettingStrategy {
    /// Whether a player holding `stake` can cover the next bet.
    fn can_cover(&self, stake: u64) -> bool;

    /// Bets for the coming spin, owned by `owner`. May be empty.
    fn bets(&mut self, owner: PlayerId) -> Vec<Bet>;

    /// Reset to the state a fresh session starts from.
    fn new_round(&mut self) {}

    /// Called for each of the player's bets that paid.
    fn won(&mut self, _bet: &Bet) {}

    /// Called for each of the player's bets that lost.
    fn lost(&mut self, _bet: &Bet) {}

    /// Called once per spin with every outcome that paid, bet on or not.
    fn notify_winners(&mut self, _bin: &Bin) {}
}

/// Selects which strategy a player uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Passenger57,
    Martingale,
    SevenReds,
    Fibonacci,
    Cancellation,
    OneThreeTwoSix,
    RandomChoice,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown player type: {name}")]
pub struct UnknownStrategy {
    pub name: String,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::Passenger57,
        StrategyKind::Martingale,
        StrategyKind::SevenReds,
        StrategyKind::Fibonacci,
        StrategyKind::Cancellation,
        StrategyKind::OneThreeTwoSix,
        StrategyKind::RandomChoice,
        StrategyKind::Idle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Passenger57 => "PASSENGER57",
            StrategyKind::Martingale => "MARTINGALE",
            StrategyKind::SevenReds => "SEVEN_REDS",
            StrategyKind::Fibonacci => "FIBONACCI",
            StrategyKind::Cancellation => "CANCELLATION",
            StrategyKind::OneThreeTwoSix => "ONE_THREE_TWO_SIX",
            StrategyKind::RandomChoice => "RANDOM_CHOICE",
            StrategyKind::Idle => "IDLE",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    /// Accepts `SEVEN_REDS`, `seven-reds` and `SevenReds` alike.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalize = |s: &str| {
            s.chars()
                .filter(|c| *c != '_' && *c != '-')
                .collect::<String>()
                .to_ascii_uppercase()
        };
        let wanted = normalize(name);
        StrategyKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| UnknownStrategy {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Never bets and never plays.
#[derive(Clone, Debug, Default)]
pub struct Idle;

impl BettingStrategy for Idle {
    fn can_cover(&self, _stake: u64) -> bool {
        false
    }

    fn bets(&mut self, _owner: PlayerId) -> Vec<Bet> {
        Vec::new()
    }
}

/// A strategy and its state.
pub enum Strategy {
    Passenger57(Passenger57),
    Martingale(Martingale),
    SevenReds(SevenReds),
    Fibonacci(Fibonacci),
    Cancellation(Cancellation),
    OneThreeTwoSix(OneThreeTwoSix),
    RandomChoice(RandomChoice),
    Idle(Idle),
}

impl Strategy {
    /// Build a strategy of `kind` against a populated wheel.
    ///
    /// `rng` seeds randomized strategies; each receives its own fork.
    pub fn build(
        kind: StrategyKind,
        wheel: &Wheel,
        base_bet: u64,
        rng: &mut GameRng,
    ) -> Result<Self, UnknownOutcome> {
        Ok(match kind {
            StrategyKind::Passenger57 => Strategy::Passenger57(Passenger57::new(wheel, base_bet)?),
            StrategyKind::Martingale => Strategy::Martingale(Martingale::new(wheel, base_bet)?),
            StrategyKind::SevenReds => Strategy::SevenReds(SevenReds::new(wheel, base_bet)?),
            StrategyKind::Fibonacci => Strategy::Fibonacci(Fibonacci::new(wheel)?),
            StrategyKind::Cancellation => Strategy::Cancellation(Cancellation::new(wheel)?),
            StrategyKind::OneThreeTwoSix => {
                Strategy::OneThreeTwoSix(OneThreeTwoSix::new(wheel, base_bet)?)
            }
            StrategyKind::RandomChoice => {
                Strategy::RandomChoice(RandomChoice::new(wheel, base_bet, rng.fork()))
            }
            StrategyKind::Idle => Strategy::Idle(Idle),
        })
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Passenger57(_) => StrategyKind::Passenger57,
            Strategy::Martingale(_) => StrategyKind::Martingale,
            Strategy::SevenReds(_) => StrategyKind::SevenReds,
            Strategy::Fibonacci(_) => StrategyKind::Fibonacci,
            Strategy::Cancellation(_) => StrategyKind::Cancellation,
            Strategy::OneThreeTwoSix(_) => StrategyKind::OneThreeTwoSix,
            Strategy::RandomChoice(_) => StrategyKind::RandomChoice,
            Strategy::Idle(_) => StrategyKind::Idle,
        }
    }

    fn inner(&self) -> &dyn BettingStrategy {
        match self {
            Strategy::Passenger57(s) => s,
            Strategy::Martingale(s) => s,
            Strategy::SevenReds(s) => s,
            Strategy::Fibonacci(s) => s,
            Strategy::Cancellation(s) => s,
            Strategy::OneThreeTwoSix(s) => s,
            Strategy::RandomChoice(s) => s,
            Strategy::Idle(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BettingStrategy {
        match self {
            Strategy::Passenger57(s) => s,
            Strategy::Martingale(s) => s,
            Strategy::SevenReds(s) => s,
            Strategy::Fibonacci(s) => s,
            Strategy::Cancellation(s) => s,
            Strategy::OneThreeTwoSix(s) => s,
            Strategy::RandomChoice(s) => s,
            Strategy::Idle(s) => s,
        }
    }
}

impl BettingStrategy for Strategy {
    fn can_cover(&self, stake: u64) -> bool {
        self.inner().can_cover(stake)
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        self.inner_mut().bets(owner)
    }

    fn new_round(&mut self) {
        self.inner_mut().new_round()
    }

    fn won(&mut self, bet: &Bet) {
        self.inner_mut().won(bet)
    }

    fn lost(&mut self, bet: &Bet) {
        self.inner_mut().lost(bet)
    }

    fn notify_winners(&mut self, bin: &Bin) {
        self.inner_mut().notify_winners(bin)
    }
}

/// A seat at the table: wallet, round budget and strategy.
pub struct Player {
    id: PlayerId,
    pub stake: u64,
    pub rounds_left: u32,
    strategy: Strategy,
}

impl Player {
    /// A player with an empty wallet and no rounds; the simulator sets both
    /// at the start of each session.
    pub fn new(id: PlayerId, strategy: Strategy) -> Self {
        Self {
            id,
            stake: 0,
            rounds_left: 0,
            strategy,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// True while rounds remain and the stake covers the next bet.
    pub fn playing(&self) -> bool {
        self.rounds_left > 0 && self.strategy.can_cover(self.stake)
    }

    /// Put this round's bets on the table, debiting the stake for each.
    pub fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet> {
        for bet in self.strategy.bets(self.id) {
            table.place_bet(bet, Some(&mut self.stake))?;
        }
        Ok(())
    }

    pub fn new_round(&mut self) {
        self.strategy.new_round();
    }

    /// Credit a winning bet's full return.
    pub fn win(&mut self, bet: &Bet) {
        self.stake = self.stake.saturating_add(bet.win_amount());
        self.strategy.won(bet);
    }

    /// The stake was already debited when the bet was placed.
    pub fn lose(&mut self, bet: &Bet) {
        self.strategy.lost(bet);
    }

    pub fn notify_winners(&mut self, bin: &Bin) {
        self.strategy.notify_winners(bin);
    }
}

/// Look up the outcome a strategy bets on.
fn lookup(wheel: &Wheel, name: BetName) -> Result<Outcome, UnknownOutcome> {
    wheel.outcome(name.name()).ok_or_else(|| UnknownOutcome {
        name: name.name().to_string(),
    })
}
