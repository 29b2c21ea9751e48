use super::{lookup, BettingStrategy};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId};

/// Bets the same amount on black every spin.
#[derive(Clone, Debug)]
pub struct Passenger57 {
    black: Outcome,
    base_bet: u64,
}

impl Passenger57 {
    pub fn new(wheel: &Wheel, base_bet: u64) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            black: lookup(wheel, BetName::Black)?,
            base_bet,
        })
    }
}

impl BettingStrategy for Passenger57 {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.base_bet
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        vec![Bet::owned(self.base_bet, self.black.clone(), owner)]
    }
}
