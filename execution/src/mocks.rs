use crate::casino::{GameRng, Player, Strategy, StrategyKind, Table, Wheel};
use roulette_types::casino::{Bet, BetName, Outcome, PlayerId, TABLE_MINIMUM};

/// Creates a fully built wheel spinning from `seed`
pub fn create_wheel(seed: u64) -> Wheel {
    Wheel::american(GameRng::new(seed))
}

/// Creates a player betting the table minimum with the given wallet and round budget
pub fn create_player(kind: StrategyKind, wheel: &Wheel, stake: u64, rounds: u32) -> Player {
    let mut rng = GameRng::new(1);
    let strategy = Strategy::build(kind, wheel, TABLE_MINIMUM, &mut rng)
        .expect("Failed to build strategy");
    let mut player = Player::new(PlayerId(1), strategy);
    player.stake = stake;
    player.rounds_left = rounds;
    player
}

/// Places the player's next bets on a fresh table and returns them
pub fn place_bets(player: &mut Player) -> Vec<Bet> {
    let mut table = Table::default();
    player
        .place_bets(&mut table)
        .expect("Failed to place bets");
    table.take_bets()
}

/// The wheel's black outcome
pub fn black(wheel: &Wheel) -> Outcome {
    wheel
        .outcome(BetName::Black.name())
        .expect("Wheel has no black outcome")
}
