//! Value types shared by the roulette execution engine and simulator.

pub mod casino;
