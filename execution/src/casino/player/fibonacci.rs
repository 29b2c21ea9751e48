use super::{lookup, BettingStrategy};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId};

/// Bets on black, stepping forward through the Fibonacci sequence on each
/// loss and back to 1 on a win.
///
/// Amounts are raw units and ignore the configured base bet.
#[derive(Clone, Debug)]
pub struct Fibonacci {
    black: Outcome,
    current: u64,
    previous: u64,
}

impl Fibonacci {
    pub fn new(wheel: &Wheel) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            black: lookup(wheel, BetName::Black)?,
            current: 1,
            previous: 0,
        })
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn previous(&self) -> u64 {
        self.previous
    }

    fn reset(&mut self) {
        self.current = 1;
        self.previous = 0;
    }
}

impl BettingStrategy for Fibonacci {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.current
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        vec![Bet::owned(self.current, self.black.clone(), owner)]
    }

    fn new_round(&mut self) {
        self.reset();
    }

    fn won(&mut self, _bet: &Bet) {
        self.reset();
    }

    fn lost(&mut self, _bet: &Bet) {
        let next = self.current.saturating_add(self.previous);
        self.previous = self.current;
        self.current = next;
    }
}
