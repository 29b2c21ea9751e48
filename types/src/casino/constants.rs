/// Number of bins on an American double-zero wheel (0, 00, 1-36)
pub const BIN_COUNT: usize = 38;

/// Bin index of "00"
pub const DOUBLE_ZERO: usize = 37;

/// Highest numbered pocket on the layout
pub const MAX_NUMBER: usize = 36;

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [usize; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

// Inside bet payouts (N:1)
pub const STRAIGHT_BET_PAYOUT: u64 = 35;
pub const SPLIT_BET_PAYOUT: u64 = 17;
pub const STREET_BET_PAYOUT: u64 = 11;
pub const CORNER_BET_PAYOUT: u64 = 8;
pub const FIVE_BET_PAYOUT: u64 = 6;
pub const LINE_BET_PAYOUT: u64 = 5;

// Outside bet payouts (N:1)
pub const DOZEN_BET_PAYOUT: u64 = 2;
pub const COLUMN_BET_PAYOUT: u64 = 2;
pub const EVEN_MONEY_BET_PAYOUT: u64 = 1;

/// Smallest amount accepted for a single bet
pub const TABLE_MINIMUM: u64 = 1;

/// Largest total accepted across one round's bets
pub const TABLE_LIMIT: u64 = u64::MAX;

/// Rounds in a session unless configured otherwise
pub const DEFAULT_SESSION_DURATION: u32 = 250;

/// Starting stake for every session unless configured otherwise
pub const DEFAULT_INITIAL_STAKE: u64 = TABLE_MINIMUM * 100;

/// Sessions gathered per run unless configured otherwise
pub const DEFAULT_SAMPLES: usize = 50;

/// Consecutive reds SevenReds waits for before betting
pub const SEVEN_REDS_STREAK: u32 = 7;

/// Opening sequence of the cancellation system
pub const CANCELLATION_SEQUENCE: [u64; 6] = [1, 2, 3, 4, 5, 6];

/// Returns true if `number` is one of the 18 red pockets.
pub fn is_red(number: usize) -> bool {
    RED_NUMBERS.contains(&number)
}

/// Display label for a bin index (index 37 is "00").
pub fn bin_label(index: usize) -> String {
    if index == DOUBLE_ZERO {
        "00".to_string()
    } else {
        index.to_string()
    }
}
