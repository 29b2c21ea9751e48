use super::Outcome;
use std::fmt;

/// Identifies the player that owns a bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// An amount wagered on one outcome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bet {
    pub amount: u64,
    pub outcome: Outcome,
    pub owner: Option<PlayerId>,
}

impl Bet {
    /// A bet with no owning player (nothing is debited when it is placed).
    pub fn new(amount: u64, outcome: Outcome) -> Self {
        Self {
            amount,
            outcome,
            owner: None,
        }
    }

    pub fn owned(amount: u64, outcome: Outcome, owner: PlayerId) -> Self {
        Self {
            amount,
            outcome,
            owner: Some(owner),
        }
    }

    /// Total returned on a win: the stake plus the outcome's winnings.
    pub fn win_amount(&self) -> u64 {
        self.amount
            .saturating_add(self.outcome.win_amount(self.amount))
    }

    /// Amount forfeited on a loss.
    pub fn lose_amount(&self) -> u64 {
        self.amount
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}
