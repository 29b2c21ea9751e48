use super::{lookup, BettingStrategy};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId};

/// Bets on black, doubling the bet after each loss and returning to the base
/// bet after a win.
#[derive(Clone, Debug)]
pub struct Martingale {
    black: Outcome,
    base_bet: u64,
    loss_count: u32,
    bet_multiple: u64,
}

impl Martingale {
    pub fn new(wheel: &Wheel, base_bet: u64) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            black: lookup(wheel, BetName::Black)?,
            base_bet,
            loss_count: 0,
            bet_multiple: 1,
        })
    }

    /// Losses since the last win (the multiple is `2^loss_count`).
    pub fn loss_count(&self) -> u32 {
        self.loss_count
    }

    pub fn bet_multiple(&self) -> u64 {
        self.bet_multiple
    }

    pub fn current_bet(&self) -> u64 {
        self.base_bet.saturating_mul(self.bet_multiple)
    }

    fn reset(&mut self) {
        self.loss_count = 0;
        self.bet_multiple = 1;
    }
}

impl BettingStrategy for Martingale {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.current_bet()
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        vec![Bet::owned(self.current_bet(), self.black.clone(), owner)]
    }

    fn new_round(&mut self) {
        self.reset();
    }

    fn won(&mut self, _bet: &Bet) {
        self.reset();
    }

    fn lost(&mut self, _bet: &Bet) {
        self.loss_count += 1;
        self.bet_multiple = self.bet_multiple.saturating_mul(2);
    }
}
