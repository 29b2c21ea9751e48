use super::{lookup, BettingStrategy};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId, CANCELLATION_SEQUENCE};
use std::collections::VecDeque;

/// Bets on black the sum of the first and last units of a sequence.
///
/// A win cancels both ends; a loss appends the amount lost. An exhausted
/// sequence starts over from `1..=6`. Amounts are raw units.
#[derive(Clone, Debug)]
pub struct Cancellation {
    black: Outcome,
    sequence: VecDeque<u64>,
}

impl Cancellation {
    pub fn new(wheel: &Wheel) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            black: lookup(wheel, BetName::Black)?,
            sequence: CANCELLATION_SEQUENCE.into_iter().collect(),
        })
    }

    pub fn sequence(&self) -> &VecDeque<u64> {
        &self.sequence
    }

    /// The amount the next bet will be.
    pub fn current_bet(&self) -> u64 {
        match self.sequence.len() {
            0 => CANCELLATION_SEQUENCE[0] + CANCELLATION_SEQUENCE[CANCELLATION_SEQUENCE.len() - 1],
            1 => self.sequence[0],
            n => self.sequence[0].saturating_add(self.sequence[n - 1]),
        }
    }

    fn reset(&mut self) {
        self.sequence = CANCELLATION_SEQUENCE.into_iter().collect();
    }
}

impl BettingStrategy for Cancellation {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.current_bet()
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        if self.sequence.is_empty() {
            self.reset();
        }
        vec![Bet::owned(self.current_bet(), self.black.clone(), owner)]
    }

    fn new_round(&mut self) {
        self.reset();
    }

    fn won(&mut self, _bet: &Bet) {
        self.sequence.pop_front();
        self.sequence.pop_back();
    }

    fn lost(&mut self, bet: &Bet) {
        self.sequence.push_back(bet.amount);
    }
}
