//! Property tests for hand evaluation, points, the shoe, and resolution.

use std::collections::HashSet;

use blackjack_table::{
    Bettor, Card, DECK_SIZE, Drawable, Hand, HandSnapshot, Outcome, Player, Shoe, ValuedHand,
    blackjack_payout, card::standard_deck, resolve,
};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn deck() -> Vec<Card> {
    standard_deck().collect()
}

fn hand_from(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card).unwrap();
    }
    hand
}

proptest! {
    #[test]
    fn hand_value_ignores_card_order(indices in subsequence((0..DECK_SIZE).collect::<Vec<_>>(), 0..=8)) {
        let deck = deck();
        let cards: Vec<Card> = indices.iter().map(|&i| deck[i]).collect();
        let mut reversed = cards.clone();
        reversed.reverse();

        let forward = hand_from(&cards);
        let backward = hand_from(&reversed);
        prop_assert_eq!(forward.value(), backward.value());
        prop_assert_eq!(forward.is_soft(), backward.is_soft());
    }

    #[test]
    fn hand_value_stays_under_bust_while_aces_can_drop(indices in subsequence((0..DECK_SIZE).collect::<Vec<_>>(), 1..=8)) {
        let deck = deck();
        let cards: Vec<Card> = indices.iter().map(|&i| deck[i]).collect();
        let hand = hand_from(&cards);

        let hard_total: usize = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { usize::from(card.value()) })
            .sum();
        if hard_total <= 21 {
            prop_assert!(!hand.is_bust());
        } else {
            prop_assert_eq!(usize::from(hand.value()), hard_total);
        }
    }

    #[test]
    fn overdrawn_points_are_rejected(balance in 0usize..1_000, extra in 1usize..1_000) {
        let mut player = Player::new("Ada", balance);
        prop_assert!(player.remove_points(balance + extra).is_err());
        prop_assert_eq!(player.points(), balance);
    }

    #[test]
    fn bets_accepted_only_within_balance(balance in 1usize..500, amount in 0usize..1_000) {
        let mut player = Player::new("Ada", balance);
        let accepted = player.place_bet(amount).is_ok();
        prop_assert_eq!(accepted, (1..=balance).contains(&amount));
        prop_assert_eq!(player.current_bet(), if accepted { amount } else { 0 });
    }

    #[test]
    fn drawn_and_remaining_account_for_every_card(seed in any::<u64>(), draws in 0usize..=DECK_SIZE) {
        let mut shoe = Shoe::new(seed);
        let mut seen = HashSet::new();
        for _ in 0..draws {
            prop_assert!(seen.insert(shoe.draw().unwrap()));
        }
        prop_assert_eq!(shoe.remaining() + draws, DECK_SIZE);
        for card in shoe.iter() {
            prop_assert!(!seen.contains(card));
        }
    }

    #[test]
    fn busted_player_always_loses_the_bet(
        player_value in 22u8..=30,
        bet in 1usize..1_000,
        dealer_value in 2u8..=30,
        dealer_blackjack in any::<bool>(),
    ) {
        let dealer = if dealer_blackjack {
            HandSnapshot::new(21, false, true)
        } else {
            HandSnapshot::new(dealer_value, dealer_value > 21, false)
        };
        let resolution = resolve(HandSnapshot::new(player_value, true, false), bet, dealer).unwrap();
        prop_assert_eq!(resolution.outcome, Outcome::Lose);
        prop_assert_eq!(resolution.delta, -isize::try_from(bet).unwrap());
    }

    #[test]
    fn blackjack_payout_is_floor_of_one_and_a_half(bet in 1usize..1_000_000) {
        prop_assert_eq!(blackjack_payout(bet), Some(bet * 3 / 2));
    }
}
