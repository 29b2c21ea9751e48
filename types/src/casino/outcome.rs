use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
};

/// A named proposition on the layout with a fixed N:1 payout.
///
/// Equality, ordering and hashing only consider the name: two outcomes with the
/// same name compare equal even if their odds differ. The bin builder never
/// creates such a pair, so the name alone identifies an outcome.
#[derive(Clone, Debug)]
pub struct Outcome {
    name: String,
    odds: u64,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: u64) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numerator of the payout (17 for a 17:1 split).
    pub fn odds(&self) -> u64 {
        self.odds
    }

    /// Net winnings for `amount` (excludes the returned stake).
    pub fn win_amount(&self, amount: u64) -> u64 {
        self.odds.saturating_mul(amount)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Outcome {}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}

/// Every outcome that pays when the wheel stops on one pocket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bin {
    outcomes: BTreeSet<Outcome>,
}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outcome. Returns false if an outcome with the same name is
    /// already present.
    pub fn insert(&mut self, outcome: Outcome) -> bool {
        self.outcomes.insert(outcome)
    }

    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{outcome}")?;
        }
        f.write_str("]")
    }
}
