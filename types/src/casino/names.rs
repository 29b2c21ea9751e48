use std::{fmt, str::FromStr};
use thiserror::Error;

/// Logical bet names used to label outcomes on the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetName {
    Five,
    Split,
    Street,
    Corner,
    Line,
    Dozen,
    Column,
    Red,
    Black,
    Even,
    Odd,
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bet name key: {key}")]
pub struct UnknownBetName {
    pub key: String,
}

impl BetName {
    pub const ALL: [BetName; 13] = [
        BetName::Five,
        BetName::Split,
        BetName::Street,
        BetName::Corner,
        BetName::Line,
        BetName::Dozen,
        BetName::Column,
        BetName::Red,
        BetName::Black,
        BetName::Even,
        BetName::Odd,
        BetName::High,
        BetName::Low,
    ];

    /// Lookup key of this name (`five`, `split`, ...).
    pub fn key(self) -> &'static str {
        match self {
            BetName::Five => "five",
            BetName::Split => "split",
            BetName::Street => "street",
            BetName::Corner => "corner",
            BetName::Line => "line",
            BetName::Dozen => "dozen",
            BetName::Column => "column",
            BetName::Red => "red",
            BetName::Black => "black",
            BetName::Even => "even",
            BetName::Odd => "odd",
            BetName::High => "high",
            BetName::Low => "low",
        }
    }

    /// Display string used in outcome names.
    pub fn name(self) -> &'static str {
        match self {
            BetName::Five => "Five Bet",
            BetName::Split => "Split",
            BetName::Street => "Street",
            BetName::Corner => "Corner",
            BetName::Line => "Line",
            BetName::Dozen => "Dozen",
            BetName::Column => "Column",
            BetName::Red => "Red",
            BetName::Black => "Black",
            BetName::Even => "Even",
            BetName::Odd => "Odd",
            BetName::High => "High",
            BetName::Low => "Low",
        }
    }
}

impl FromStr for BetName {
    type Err = UnknownBetName;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        BetName::ALL
            .into_iter()
            .find(|name| name.key() == key)
            .ok_or_else(|| UnknownBetName {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for BetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
