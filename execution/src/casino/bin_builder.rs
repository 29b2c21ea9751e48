//! Populates the 38 bins of an American wheel.
//!
//! The layout is 12 rows of 3 numbers: row `r` holds `3r+1`, `3r+2`, `3r+3`
//! and column `c` holds every number with `(n - 1) % 3 == c`. Zero and
//! double zero only pay their straight bet and the five bet.

use super::Wheel;
use roulette_types::casino::{
    is_red, BetName, Outcome, COLUMN_BET_PAYOUT, CORNER_BET_PAYOUT, DOUBLE_ZERO,
    DOZEN_BET_PAYOUT, EVEN_MONEY_BET_PAYOUT, FIVE_BET_PAYOUT, LINE_BET_PAYOUT, MAX_NUMBER,
    SPLIT_BET_PAYOUT, STRAIGHT_BET_PAYOUT, STREET_BET_PAYOUT,
};
use tracing::debug;

/// Rows on the layout.
const ROWS: usize = 12;

pub struct BinBuilder;

impl BinBuilder {
    /// Add every standard bet's outcome to the bins it pays on.
    pub fn build_bins(wheel: &mut Wheel) {
        Self::straight_bets(wheel);
        Self::split_bets(wheel);
        Self::street_bets(wheel);
        Self::corner_bets(wheel);
        Self::line_bets(wheel);
        Self::five_bet(wheel);
        Self::dozen_bets(wheel);
        Self::column_bets(wheel);
        Self::even_money_bets(wheel);
        debug!(outcomes = wheel.all_outcomes().count(), "built wheel bins");
    }

    fn straight_bets(wheel: &mut Wheel) {
        for n in 0..=MAX_NUMBER {
            wheel.add_outcome(n, Outcome::new(n.to_string(), STRAIGHT_BET_PAYOUT));
        }
        wheel.add_outcome(DOUBLE_ZERO, Outcome::new("00", STRAIGHT_BET_PAYOUT));
    }

    fn split_bets(wheel: &mut Wheel) {
        // Left-right pairs within a row
        for r in 0..ROWS {
            for n in [3 * r + 1, 3 * r + 2] {
                Self::add_group(wheel, BetName::Split, &[n, n + 1], SPLIT_BET_PAYOUT);
            }
        }
        // Up-down pairs across rows
        for n in 1..=MAX_NUMBER - 3 {
            Self::add_group(wheel, BetName::Split, &[n, n + 3], SPLIT_BET_PAYOUT);
        }
    }

    fn street_bets(wheel: &mut Wheel) {
        for r in 0..ROWS {
            let n = 3 * r + 1;
            Self::add_group(wheel, BetName::Street, &[n, n + 1, n + 2], STREET_BET_PAYOUT);
        }
    }

    fn corner_bets(wheel: &mut Wheel) {
        for r in 0..ROWS - 1 {
            for n in [3 * r + 1, 3 * r + 2] {
                Self::add_group(
                    wheel,
                    BetName::Corner,
                    &[n, n + 1, n + 3, n + 4],
                    CORNER_BET_PAYOUT,
                );
            }
        }
    }

    fn line_bets(wheel: &mut Wheel) {
        for r in 0..ROWS - 1 {
            let n = 3 * r + 1;
            let numbers: Vec<usize> = (n..n + 6).collect();
            Self::add_group(wheel, BetName::Line, &numbers, LINE_BET_PAYOUT);
        }
    }

    fn five_bet(wheel: &mut Wheel) {
        let five = Outcome::new(BetName::Five.name(), FIVE_BET_PAYOUT);
        for index in [0, DOUBLE_ZERO, 1, 2, 3] {
            wheel.add_outcome(index, five.clone());
        }
    }

    fn dozen_bets(wheel: &mut Wheel) {
        for d in 0..3 {
            let first = 12 * d + 1;
            let dozen = Outcome::new(
                format!("{} {}-{}", BetName::Dozen.name(), first, first + 11),
                DOZEN_BET_PAYOUT,
            );
            for n in first..first + 12 {
                wheel.add_outcome(n, dozen.clone());
            }
        }
    }

    fn column_bets(wheel: &mut Wheel) {
        for c in 0..3 {
            let column = Outcome::new(
                format!("{} {}", BetName::Column.name(), c + 1),
                COLUMN_BET_PAYOUT,
            );
            for r in 0..ROWS {
                wheel.add_outcome(3 * r + c + 1, column.clone());
            }
        }
    }

    fn even_money_bets(wheel: &mut Wheel) {
        let even_money = |name: BetName| Outcome::new(name.name(), EVEN_MONEY_BET_PAYOUT);
        for n in 1..=MAX_NUMBER {
            let range = if n <= 18 { BetName::Low } else { BetName::High };
            let parity = if n % 2 == 0 { BetName::Even } else { BetName::Odd };
            let color = if is_red(n) { BetName::Red } else { BetName::Black };
            for name in [range, parity, color] {
                wheel.add_outcome(n, even_money(name));
            }
        }
    }

    /// Add one outcome named after `numbers` ("Corner 1-2-4-5") to each of them.
    fn add_group(wheel: &mut Wheel, name: BetName, numbers: &[usize], odds: u64) {
        let label = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-");
        let outcome = Outcome::new(format!("{} {}", name.name(), label), odds);
        for &n in numbers {
            wheel.add_outcome(n, outcome.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casino::GameRng;
    use roulette_types::casino::{Bin, BIN_COUNT};

    fn built_wheel() -> Wheel {
        Wheel::american(GameRng::new(1))
    }

    fn count_prefix(bin: &Bin, prefix: &str) -> usize {
        bin.iter().filter(|o| o.name().starts_with(prefix)).count()
    }

    fn count_named(bin: &Bin, name: BetName) -> usize {
        bin.iter().filter(|o| o.name() == name.name()).count()
    }

    fn count_straight(bin: &Bin) -> usize {
        bin.iter()
            .filter(|o| o.name().chars().all(|c| c.is_ascii_digit()))
            .count()
    }

    #[test]
    fn test_line_outcomes() {
        let wheel = built_wheel();
        let lines = wheel.outcomes_by_name("Line");
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|o| o.odds() == LINE_BET_PAYOUT));
    }

    #[test]
    fn test_outcome_totals() {
        let wheel = built_wheel();
        assert_eq!(wheel.outcomes_by_name("Split").len(), 57);
        assert_eq!(wheel.outcomes_by_name("Street").len(), 12);
        assert_eq!(wheel.outcomes_by_name("Corner").len(), 22);
        assert_eq!(wheel.outcomes_by_name("Dozen").len(), 3);
        assert_eq!(wheel.outcomes_by_name("Column").len(), 3);
        // 38 straights, 57 splits, 12 streets, 22 corners, 11 lines, the five
        // bet, 3 dozens, 3 columns and 6 even-money outcomes
        assert_eq!(wheel.all_outcomes().count(), 153);
    }

    #[test]
    fn test_single_even_money_lookups() {
        let wheel = built_wheel();
        for name in [
            BetName::Red,
            BetName::Black,
            BetName::Even,
            BetName::Odd,
            BetName::High,
            BetName::Low,
        ] {
            let found = wheel.outcomes_by_name(name.name());
            assert_eq!(found.len(), 1, "{name}");
            assert_eq!(found[0].odds(), EVEN_MONEY_BET_PAYOUT);
        }
    }

    #[test]
    fn test_zero_bins() {
        let wheel = built_wheel();
        let five = Outcome::new(BetName::Five.name(), FIVE_BET_PAYOUT);

        let zero = wheel.bin(0).unwrap();
        assert_eq!(zero.len(), 2);
        assert!(zero.contains(&Outcome::new("0", STRAIGHT_BET_PAYOUT)));
        assert!(zero.contains(&five));

        let double_zero = wheel.bin(DOUBLE_ZERO).unwrap();
        assert_eq!(double_zero.len(), 2);
        assert!(double_zero.contains(&Outcome::new("00", STRAIGHT_BET_PAYOUT)));
        assert!(double_zero.contains(&five));
    }

    #[test]
    fn test_interior_bin_contents() {
        let wheel = built_wheel();
        for n in 1..=MAX_NUMBER {
            let bin = wheel.bin(n).unwrap();
            assert_eq!(count_straight(bin), 1, "bin {n}");
            assert!((2..=4).contains(&count_prefix(bin, "Split ")), "bin {n}");
            assert_eq!(count_prefix(bin, "Street "), 1, "bin {n}");
            assert!((1..=4).contains(&count_prefix(bin, "Corner ")), "bin {n}");
            assert!((1..=2).contains(&count_prefix(bin, "Line ")), "bin {n}");
            assert_eq!(count_prefix(bin, "Dozen "), 1, "bin {n}");
            assert_eq!(count_prefix(bin, "Column "), 1, "bin {n}");
            assert_eq!(
                count_named(bin, BetName::Red) + count_named(bin, BetName::Black),
                1
            );
            assert_eq!(
                count_named(bin, BetName::Even) + count_named(bin, BetName::Odd),
                1
            );
            assert_eq!(
                count_named(bin, BetName::Low) + count_named(bin, BetName::High),
                1
            );
            assert_eq!(count_named(bin, BetName::Five), usize::from(n <= 3));
        }
    }

    #[test]
    fn test_bin_totals() {
        let wheel = built_wheel();
        // 1: straight, 2 splits, street, corner, line, five, 3 even-money, dozen, column
        assert_eq!(wheel.bin(1).unwrap().len(), 12);
        // 5: straight, 4 splits, street, 4 corners, 2 lines, 3 even-money, dozen, column
        assert_eq!(wheel.bin(5).unwrap().len(), 17);
        // 36: straight, 2 splits, street, corner, line, 3 even-money, dozen, column
        assert_eq!(wheel.bin(36).unwrap().len(), 11);
    }

    #[test]
    fn test_bin_one_outcomes() {
        let wheel = built_wheel();
        let bin = wheel.bin(1).unwrap();
        for name in [
            "1",
            "Split 1-2",
            "Split 1-4",
            "Street 1-2-3",
            "Corner 1-2-4-5",
            "Line 1-2-3-4-5-6",
            "Five Bet",
            "Dozen 1-12",
            "Column 1",
            "Red",
            "Odd",
            "Low",
        ] {
            assert!(bin.contains(&Outcome::new(name, 0)), "missing {name}");
        }
    }

    #[test]
    fn test_color_partition() {
        let wheel = built_wheel();
        let red = wheel.outcome(BetName::Red.name()).unwrap();
        let black = wheel.outcome(BetName::Black.name()).unwrap();
        let reds: Vec<usize> = (0..BIN_COUNT)
            .filter(|&i| wheel.bin(i).unwrap().contains(&red))
            .collect();
        let blacks = (0..BIN_COUNT)
            .filter(|&i| wheel.bin(i).unwrap().contains(&black))
            .count();
        assert_eq!(reds, roulette_types::casino::RED_NUMBERS.to_vec());
        assert_eq!(blacks, 18);
    }

    #[test]
    fn test_dozens_and_columns() {
        let wheel = built_wheel();
        let second = wheel.outcome("Dozen 13-24").unwrap();
        assert_eq!(second.odds(), DOZEN_BET_PAYOUT);
        assert!(wheel.bin(13).unwrap().contains(&second));
        assert!(wheel.bin(24).unwrap().contains(&second));
        assert!(!wheel.bin(25).unwrap().contains(&second));

        let third = wheel.outcome("Column 3").unwrap();
        assert!(wheel.bin(3).unwrap().contains(&third));
        assert!(wheel.bin(36).unwrap().contains(&third));
        assert!(!wheel.bin(35).unwrap().contains(&third));
    }
}
