use super::{lookup, BettingStrategy, Martingale};
use crate::casino::{UnknownOutcome, Wheel};
use roulette_types::casino::{Bet, BetName, Bin, Outcome, PlayerId, SEVEN_REDS_STREAK};

/// Sits out until red has come up seven spins running, then plays
/// Martingale on black. Any non-red spin resets the streak.
#[derive(Clone, Debug)]
pub struct SevenReds {
    martingale: Martingale,
    red: Outcome,
    red_count: u32,
}

impl SevenReds {
    pub fn new(wheel: &Wheel, base_bet: u64) -> Result<Self, UnknownOutcome> {
        Ok(Self {
            martingale: Martingale::new(wheel, base_bet)?,
            red: lookup(wheel, BetName::Red)?,
            red_count: 0,
        })
    }

    /// Consecutive red spins seen.
    pub fn red_count(&self) -> u32 {
        self.red_count
    }

    pub fn martingale(&self) -> &Martingale {
        &self.martingale
    }
}

impl BettingStrategy for SevenReds {
    fn can_cover(&self, stake: u64) -> bool {
        self.martingale.can_cover(stake)
    }

    fn bets(&mut self, owner: PlayerId) -> Vec<Bet> {
        if self.red_count < SEVEN_REDS_STREAK {
            return Vec::new();
        }
        self.martingale.bets(owner)
    }

    fn new_round(&mut self) {
        self.martingale.new_round();
        self.red_count = 0;
    }

    fn won(&mut self, bet: &Bet) {
        self.martingale.won(bet);
    }

    fn lost(&mut self, bet: &Bet) {
        self.martingale.lost(bet);
    }

    fn notify_winners(&mut self, bin: &Bin) {
        if bin.contains(&self.red) {
            self.red_count += 1;
        } else {
            self.red_count = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::StrategyKind;
    use crate::mocks::{black, create_player, create_wheel, place_bets};

    fn red_bin(wheel: &Wheel) -> Bin {
        wheel.bin(1).expect("bin 1").clone()
    }

    fn black_bin(wheel: &Wheel) -> Bin {
        wheel.bin(2).expect("bin 2").clone()
    }

    #[test]
    fn test_waits_for_seven_reds() {
        let wheel = create_wheel(1);
        let mut player = create_player(StrategyKind::SevenReds, &wheel, 100, 250);

        for _ in 0..7 {
            assert!(place_bets(&mut player).is_empty());
            player.notify_winners(&red_bin(&wheel));
        }

        let bets = place_bets(&mut player);
        assert_eq!(bets, vec![Bet::owned(1, black(&wheel), player.id())]);

        // Doubles after a loss while the streak continues
        player.lose(&bets[0]);
        player.notify_winners(&red_bin(&wheel));
        let bets = place_bets(&mut player);
        assert_eq!(bets[0].amount, 2);
        assert_eq!(bets[0].outcome, black(&wheel));

        // A black spin breaks the streak
        player.win(&bets[0]);
        player.notify_winners(&black_bin(&wheel));
        assert!(place_bets(&mut player).is_empty());
    }

    #[test]
    fn test_zero_breaks_streak() {
        let wheel = create_wheel(1);
        let mut seven_reds = SevenReds::new(&wheel, 1).expect("Failed to build");
        for _ in 0..6 {
            seven_reds.notify_winners(&red_bin(&wheel));
        }
        assert_eq!(seven_reds.red_count(), 6);

        seven_reds.notify_winners(wheel.bin(0).expect("bin 0"));
        assert_eq!(seven_reds.red_count(), 0);
    }

    #[test]
    fn test_new_round_resets() {
        let wheel = create_wheel(1);
        let mut seven_reds = SevenReds::new(&wheel, 1).expect("Failed to build");
        for _ in 0..8 {
            seven_reds.notify_winners(&red_bin(&wheel));
        }
        let bets = seven_reds.bets(PlayerId(1));
        seven_reds.lost(&bets[0]);
        assert_eq!(seven_reds.martingale().current_bet(), 2);

        seven_reds.new_round();
        assert_eq!(seven_reds.red_count(), 0);
        assert_eq!(seven_reds.martingale().current_bet(), 1);
    }
}
