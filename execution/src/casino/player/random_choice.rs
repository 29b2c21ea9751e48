use super::BettingStrategy;
use crate::casino::{GameRng, Wheel};
use roulette_types::casino::{Bet, Outcome, PlayerId};

/// Bets the base bet on an outcome drawn uniformly from every outcome the
/// wheel offers.
#[derive(Clone)]
pub struct RandomChoice {
    outcomes: Vec<Outcome>,
    base_bet: u64,
    rng: GameRng,
}

impl RandomChoice {
    /// Snapshot the wheel's outcomes; `rng` drives every later choice.
    pub fn new(wheel: &Wheel, base_bet: u64, rng: GameRng) -> Self {
        Self {
            outcomes: wheel.all_outcomes().cloned().collect(),
            base_bet,
            rng,
        }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl BettingStrategy for RandomChoice {
    fn can_cover(&self, stake: u64) -> bool {
        stake >= self.base_bet
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        if self.outcomes.is_empty() {
            return Vec::new();
        }
        let outcome = self.outcomes[self.rng.next_bounded(self.outcomes.len())].clone();
        vec![Bet::owned(self.base_bet, outcome, owner)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::{Player, Strategy, StrategyKind, Table};
    use crate::mocks::{create_player, create_wheel};

    #[test]
    fn test_playing() {
        let wheel = create_wheel(1);
        let mut player = create_player(StrategyKind::RandomChoice, &wheel, 100, 1);
        assert!(player.playing());
        player.stake = 0;
        assert!(!player.playing());
        player.stake = 100;
        player.rounds_left = 0;
        assert!(!player.playing());
    }

    #[test]
    fn test_choices_follow_rng() {
        let wheel = create_wheel(1);
        let outcomes: Vec<Outcome> = wheel.all_outcomes().cloned().collect();
        let mut expected_rng = GameRng::new(7);
        let mut player = Player::new(
            PlayerId(1),
            Strategy::RandomChoice(RandomChoice::new(&wheel, 1, GameRng::new(7))),
        );
        let mut table = Table::default();

        for _ in 0..1_000 {
            let expected = outcomes[expected_rng.next_bounded(outcomes.len())].clone();
            player.stake = 1;
            player.place_bets(&mut table).expect("Failed to place bet");
            let bets = table.take_bets();
            assert_eq!(bets, vec![Bet::owned(1, expected, PlayerId(1))]);
            assert_eq!(player.stake, 0);
        }
    }

    #[test]
    fn test_covers_whole_wheel() {
        let wheel = create_wheel(1);
        let random_choice = RandomChoice::new(&wheel, 1, GameRng::new(1));
        assert_eq!(random_choice.outcomes().len(), 153);
    }

    #[test]
    fn test_empty_wheel_bets_nothing() {
        let wheel = Wheel::new(GameRng::new(1));
        let mut random_choice = RandomChoice::new(&wheel, 1, GameRng::new(1));
        assert!(random_choice.bets(PlayerId(1)).is_empty());
    }
}
