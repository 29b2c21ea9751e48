use super::{BinBuilder, GameRng};
use roulette_types::casino::{Bin, Outcome, BIN_COUNT};
use std::collections::BTreeMap;

/// The 38 bins of an American wheel plus the source that picks one.
///
/// Outcomes are also indexed by name so players can look up the proposition
/// they bet on. The index is ordered, which keeps iteration (and therefore any
/// seeded random pick from it) reproducible.
pub struct Wheel {
    bins: Vec<Bin>,
    outcomes: BTreeMap<String, Outcome>,
    rng: GameRng,
}

impl Wheel {
    /// Create a wheel of 38 empty bins.
    pub fn new(rng: GameRng) -> Self {
        Self {
            bins: vec![Bin::new(); BIN_COUNT],
            outcomes: BTreeMap::new(),
            rng,
        }
    }

    /// Create a wheel with every standard bet already in its bins.
    pub fn american(rng: GameRng) -> Self {
        let mut wheel = Self::new(rng);
        BinBuilder::build_bins(&mut wheel);
        wheel
    }

    /// Add `outcome` to the bin at `index` and register it by name, replacing
    /// any outcome previously registered under that name.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a bin index (0-37).
    pub fn add_outcome(&mut self, index: usize, outcome: Outcome) {
        self.bins[index].insert(outcome.clone());
        self.outcomes.insert(outcome.name().to_string(), outcome);
    }

    /// Pick a bin uniformly at random. Returns its index with the bin.
    pub fn spin(&mut self) -> (usize, &Bin) {
        let index = self.rng.spin_roulette();
        (index, &self.bins[index])
    }

    pub fn bin(&self, index: usize) -> Option<&Bin> {
        self.bins.get(index)
    }

    /// Outcome registered under exactly `name`.
    pub fn outcome(&self, name: &str) -> Option<Outcome> {
        self.outcomes.get(name).cloned()
    }

    /// Every registered outcome whose name contains `name`, in name order.
    pub fn outcomes_by_name(&self, name: &str) -> Vec<Outcome> {
        self.outcomes
            .iter()
            .filter(|(key, _)| key.contains(name))
            .map(|(_, outcome)| outcome.clone())
            .collect()
    }

    /// Every registered outcome, in name order.
    pub fn all_outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.values()
    }
}
