pub mod casino;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use casino::{
    BinBuilder, Game, GameRng, InvalidBet, Player, Strategy, StrategyKind, Table, UnknownOutcome,
    UnknownStrategy, Wheel,
};
