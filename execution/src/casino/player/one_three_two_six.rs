use super::{lookup, BettingStrategy};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId};

/// Position in the 1-3-2-6 progression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Progression {
    #[default]
    NoWins,
    OneWin,
    TwoWins,
    ThreeWins,
}

/// How the player's last bet resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinResult {
    Won,
    Lost,
}

impl Progression {
    /// Base-bet multiple staked in this state.
    pub fn multiplier(self) -> u64 {
        match self {
            Progression::NoWins => 1,
            Progression::OneWin => 3,
            Progression::TwoWins => 2,
            Progression::ThreeWins => 6,
        }
    }

    pub fn next(self, result: SpinResult) -> Self {
        match (self, result) {
            (_, SpinResult::Lost) => Progression::NoWins,
            (Progression::NoWins, SpinResult::Won) => Progression::OneWin,
            (Progression::OneWin, SpinResult::Won) => Progression::TwoWins,
            (Progression::TwoWins, SpinResult::Won) => Progression::ThreeWins,
            (Progression::ThreeWins, SpinResult::Won) => Progression::NoWins,
        }
    }
}

/// Bets on black in multiples of 1, 3, 2 and 6 of the base bet across a run
/// of wins; any loss or a fourth win starts over.
#[derive(Clone, Debug)]
pub struct OneThreeTwoSix {
    black: Outcome,
    base_bet: u64,
    state: Progression,
}

impl OneThreeTwoSix {
    pub fn new(wheel: &Wheel, base_bet: u64) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            black: lookup(wheel, BetName::Black)?,
            base_bet,
            state: Progression::default(),
        })
    }

    pub fn state(&self) -> Progression {
        self.state
    }

    pub fn current_bet(&self) -> u64 {
        self.base_bet.saturating_mul(self.state.multiplier())
    }
}

impl BettingStrategy for OneThreeTwoSix {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.current_bet()
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        vec![Bet::owned(self.current_bet(), self.black.clone(), owner)]
    }

    fn new_round(&mut self) {
        self.state = Progression::default();
    }

    fn won(&mut self, _bet: &Bet) {
        self.state = self.state.next(SpinResult::Won);
    }

    fn lost(&mut self, _bet: &Bet) {
        self.state = self.state.next(SpinResult::Lost);
    }
}
