use super::InvalidBet;
use roulette_types::casino::{Bet, TABLE_LIMIT, TABLE_MINIMUM};
use tracing::trace;

/// Bets pending for the current round and the limits they must respect.
///
/// Every bet must be at least `minimum` and the bets together may not exceed
/// `limit`. A bet that would break either rule (or that its owner cannot cover)
/// is refused before anything changes: the owner's stake is not debited and
/// the pending list is left as it was.
#[derive(Clone, Debug)]
pub struct Table {
    bets: Vec<Bet>,
    minimum: u64,
    limit: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TABLE_MINIMUM, TABLE_LIMIT)
    }
}

impl Table {
    pub fn new(minimum: u64, limit: u64) -> Self {
        Self {
            bets: Vec::new(),
            minimum,
            limit,
        }
    }

    pub fn minimum(&self) -> u64 {
        self.minimum
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Add a bet to the pending list.
    ///
    /// `stake` is the owning player's wallet; when given, the bet's amount is
    /// debited from it.
    pub fn place_bet(&mut self, bet: Bet, stake: Option<&mut u64>) -> Result<(), InvalidBet> {
        if let Some(stake) = stake.as_deref() {
            if *stake < bet.amount {
                return Err(InvalidBet::InsufficientStake {
                    amount: bet.amount,
                    stake: *stake,
                });
            }
        }
        Self::check(
            self.bets.iter().chain(std::iter::once(&bet)),
            self.minimum,
            self.limit,
        )?;

        if let Some(stake) = stake {
            *stake -= bet.amount;
        }
        trace!(bet = %bet, owner = ?bet.owner, "placed bet");
        self.bets.push(bet);
        Ok(())
    }

    /// Check the pending bets against the table minimum and limit.
    pub fn validate(&self) -> Result<(), InvalidBet> {
        Self::check(self.bets.iter(), self.minimum, self.limit)
    }

    fn check<'a>(
        bets: impl Iterator<Item = &'a Bet> + Clone,
        minimum: u64,
        limit: u64,
    ) -> Result<(), InvalidBet> {
        if let Some(bet) = bets.clone().find(|bet| bet.amount < minimum) {
            return Err(InvalidBet::BelowMinimum {
                amount: bet.amount,
                minimum,
            });
        }
        let total = bets.fold(0u64, |total, bet| total.saturating_add(bet.amount));
        if total > limit {
            return Err(InvalidBet::OverLimit { total, limit });
        }
        Ok(())
    }

    /// Bets pending for this round, in placement order.
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Sum of the pending amounts.
    pub fn total(&self) -> u64 {
        self.bets
            .iter()
            .fold(0u64, |total, bet| total.saturating_add(bet.amount))
    }

    /// Remove and return every pending bet.
    pub fn take_bets(&mut self) -> Vec<Bet> {
        std::mem::take(&mut self.bets)
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}
