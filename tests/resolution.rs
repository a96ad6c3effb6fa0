//! Round resolution tests.

use blackjack_table::{
    HandSnapshot, MAX_POINTS, Outcome, OutcomeReason, PointsError, blackjack_payout, resolve,
};

const fn standing(value: u8) -> HandSnapshot {
    HandSnapshot::new(value, false, false)
}

const fn natural() -> HandSnapshot {
    HandSnapshot::new(21, false, true)
}

const fn bust(value: u8) -> HandSnapshot {
    HandSnapshot::new(value, true, false)
}

#[test]
fn higher_total_wins_even_money() {
    let resolution = resolve(standing(20), 50, standing(18)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert_eq!(resolution.reason, OutcomeReason::HigherTotal);
    assert_eq!(resolution.delta, 50);
}

#[test]
fn lower_total_loses() {
    let resolution = resolve(standing(17), 20, standing(19)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Lose);
    assert_eq!(resolution.delta, -20);
}

#[test]
fn dealer_blackjack_beats_any_non_natural() {
    for value in [4, 12, 20, 21] {
        let resolution = resolve(standing(value), 40, natural()).unwrap();
        assert_eq!(resolution.outcome, Outcome::Lose);
        assert_eq!(resolution.reason, OutcomeReason::DealerBlackjack);
        assert_eq!(resolution.delta, -40);
    }
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let resolution = resolve(natural(), 10, standing(20)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert_eq!(resolution.reason, OutcomeReason::Blackjack);
    assert_eq!(resolution.delta, 15);

    assert_eq!(resolve(natural(), 1, standing(17)).unwrap().delta, 1);
    assert_eq!(resolve(natural(), 7, bust(25)).unwrap().delta, 10);
}

#[test]
fn busted_player_loses_even_when_dealer_busts() {
    let resolution = resolve(bust(24), 30, bust(22)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Lose);
    assert_eq!(resolution.reason, OutcomeReason::PlayerBust);
    assert_eq!(resolution.delta, -30);
}

#[test]
fn dealer_bust_pays_standing_player() {
    let resolution = resolve(standing(12), 25, bust(23)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert_eq!(resolution.reason, OutcomeReason::DealerBust);
    assert_eq!(resolution.delta, 25);
}

#[test]
fn equal_totals_push() {
    let resolution = resolve(standing(19), 60, standing(19)).unwrap();
    assert_eq!(resolution.outcome, Outcome::Push);
    assert_eq!(resolution.reason, OutcomeReason::Tie);
    assert_eq!(resolution.delta, 0);

    let both_natural = resolve(natural(), 60, natural()).unwrap();
    assert_eq!(both_natural.outcome, Outcome::Push);
}

#[test]
fn three_card_twenty_one_loses_to_dealer_blackjack() {
    let resolution = resolve(standing(21), 10, natural()).unwrap();
    assert_eq!(resolution.reason, OutcomeReason::DealerBlackjack);
}

#[test]
fn labels() {
    assert_eq!(resolve(bust(22), 1, standing(18)).unwrap().to_string(), "LOSE (Busted)");
    assert_eq!(
        resolve(standing(20), 1, natural()).unwrap().to_string(),
        "LOSE (Dealer Blackjack)"
    );
    assert_eq!(resolve(natural(), 2, standing(18)).unwrap().to_string(), "WIN (Blackjack!)");
    assert_eq!(
        resolve(standing(15), 1, bust(26)).unwrap().to_string(),
        "WIN (Dealer Busted)"
    );
    assert_eq!(resolve(standing(20), 1, standing(18)).unwrap().to_string(), "WIN");
    assert_eq!(resolve(standing(17), 1, standing(18)).unwrap().to_string(), "LOSE");
    assert_eq!(resolve(standing(18), 1, standing(18)).unwrap().to_string(), "PUSH (Tie)");
}

#[test]
fn blackjack_payout_truncates() {
    assert_eq!(blackjack_payout(10), Some(15));
    assert_eq!(blackjack_payout(25), Some(37));
    assert_eq!(blackjack_payout(1), Some(1));
    assert_eq!(blackjack_payout(usize::MAX), None);
}

#[test]
fn largest_bet_keeps_exact_deltas() {
    let stake = isize::try_from(MAX_POINTS).unwrap();

    let loss = resolve(standing(17), MAX_POINTS, standing(18)).unwrap();
    assert_eq!(loss.delta, -stake);

    let natural_win = resolve(natural(), MAX_POINTS, standing(18)).unwrap();
    assert_eq!(natural_win.delta, stake + stake / 2);
}

#[test]
fn bets_above_the_limit_are_rejected() {
    for bet in [MAX_POINTS + 1, usize::MAX] {
        assert_eq!(
            resolve(natural(), bet, standing(18)).unwrap_err(),
            PointsError::LimitExceeded { max: MAX_POINTS }
        );
    }
}
