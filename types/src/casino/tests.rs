use super::*;
use std::collections::HashSet;

#[test]
fn test_outcome_win_amount() {
    let outcome = Outcome::new("Name", 2);
    assert_eq!(outcome.win_amount(2), 4);
    assert_eq!(outcome.win_amount(0), 0);
}

#[test]
fn test_outcome_equality_by_name() {
    let outcome1 = Outcome::new("Name 1", 1);
    let outcome2 = Outcome::new("Name 1", 1);
    let outcome3 = Outcome::new("Name 2", 2);
    assert_eq!(outcome1, outcome2);
    assert_ne!(outcome1, outcome3);
    assert_ne!(outcome2, outcome3);

    // Odds do not take part in equality
    let same_name = Outcome::new("Name 1", 35);
    assert_eq!(outcome1, same_name);
}

#[test]
fn test_outcome_hash_by_name() {
    let mut set = HashSet::new();
    assert!(set.insert(Outcome::new("Name 1", 1)));
    assert!(!set.insert(Outcome::new("Name 1", 17)));
    assert!(set.insert(Outcome::new("Name 2", 1)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_outcome_display() {
    assert_eq!(Outcome::new("Split 1-2", 17).to_string(), "Split 1-2 (17:1)");
}

#[test]
fn test_bin_deduplicates_by_name() {
    let mut bin = Bin::new();
    assert!(bin.insert(Outcome::new("Red", 1)));
    assert!(!bin.insert(Outcome::new("Red", 1)));
    assert!(bin.insert(Outcome::new("1", 35)));
    assert_eq!(bin.len(), 2);
    assert!(bin.contains(&Outcome::new("Red", 1)));
    assert!(!bin.contains(&Outcome::new("Black", 1)));
}

#[test]
fn test_bin_from_iter() {
    let bin: Bin = [Outcome::new("Name 1", 1), Outcome::new("Name 2", 2)]
        .into_iter()
        .collect();
    assert_eq!(bin.len(), 2);
    assert_eq!(bin.to_string(), "[Name 1 (1:1), Name 2 (2:1)]");
    assert!(Bin::new().is_empty());
}

#[test]
fn test_bet_amounts() {
    let bet = Bet::new(2, Outcome::new("Name", 2));
    assert_eq!(bet.win_amount(), 6);
    assert_eq!(bet.lose_amount(), 2);

    let straight = Bet::new(10, Outcome::new("17", STRAIGHT_BET_PAYOUT));
    assert_eq!(straight.win_amount(), 360);
}

#[test]
fn test_bet_equality_includes_owner() {
    let outcome = Outcome::new("Black", 1);
    let a = Bet::owned(5, outcome.clone(), PlayerId(1));
    let b = Bet::owned(5, outcome.clone(), PlayerId(1));
    let c = Bet::owned(5, outcome.clone(), PlayerId(2));
    let d = Bet::new(5, outcome.clone());
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
    assert_ne!(a, Bet::owned(6, outcome, PlayerId(1)));
    assert_eq!(a.to_string(), "5 on Black (1:1)");
}

#[test]
fn test_bet_name_lookup() {
    assert_eq!("five".parse::<BetName>().unwrap().name(), "Five Bet");
    assert_eq!("black".parse::<BetName>().unwrap().name(), "Black");
    assert_eq!("line".parse::<BetName>().unwrap(), BetName::Line);
    for name in BetName::ALL {
        assert_eq!(name.key().parse::<BetName>().unwrap(), name);
    }
    let err = "zero".parse::<BetName>().unwrap_err();
    assert_eq!(err.key, "zero");
}

#[test]
fn test_red_numbers() {
    assert_eq!(RED_NUMBERS.len(), 18);
    assert!(is_red(1));
    assert!(is_red(36));
    assert!(!is_red(2));
    assert!(!is_red(0));
    assert!(!is_red(DOUBLE_ZERO));
}

#[test]
fn test_bin_labels() {
    assert_eq!(bin_label(0), "0");
    assert_eq!(bin_label(17), "17");
    assert_eq!(bin_label(DOUBLE_ZERO), "00");
}
