mod bet;
mod constants;
mod names;
mod outcome;

pub use bet::*;
pub use constants::*;
pub use names::*;
pub use outcome::*;

#[cfg(test)]
mod tests;
