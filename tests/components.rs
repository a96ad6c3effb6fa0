//! Card, hand, shoe, player, and dealer tests.

use std::collections::HashSet;

use blackjack_table::{
    BetError, Bettor, Card, DECK_SIZE, Dealer, DealerPolicy, DealerState, Drawable, DrawError,
    Hand, HandError, MAX_HAND_SIZE, MAX_POINTS, ParticipantKind, Player, PointsError, Rank, Shoe,
    ShoeError, ShowdownError, Suit, ValuedHand,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card).unwrap();
    }
    hand
}

#[test]
fn card_values_and_names() {
    assert_eq!(card(Suit::Hearts, Rank::Ace).value(), 11);
    assert_eq!(card(Suit::Hearts, Rank::Seven).value(), 7);
    assert_eq!(card(Suit::Hearts, Rank::Queen).value(), 10);
    assert!(card(Suit::Spades, Rank::Ace).is_ace());
    assert!(!card(Suit::Spades, Rank::King).is_ace());

    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "AH");
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "10S");
    assert_eq!(
        card(Suit::Hearts, Rank::Ace).long_name().to_string(),
        "Ace of Hearts"
    );
    assert_eq!(
        card(Suit::Clubs, Rank::Seven).long_name().to_string(),
        "7 of Clubs"
    );
}

#[test]
fn ace_downgrade_rule() {
    let ace_king = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)]);
    assert_eq!(ace_king.value(), 21);
    assert!(ace_king.is_soft());
    assert!(ace_king.is_blackjack());

    let two_aces_nine = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Nine),
    ]);
    assert_eq!(two_aces_nine.value(), 21);
    assert!(!two_aces_nine.is_blackjack());

    let two_aces = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)]);
    assert_eq!(two_aces.value(), 12);
    assert!(two_aces.is_soft());

    let hard = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
    ]);
    assert_eq!(hard.value(), 15);
    assert!(!hard.is_soft());
}

#[test]
fn bust_and_three_card_twenty_one() {
    let bust = hand_of(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Two),
    ]);
    assert!(bust.is_bust());
    assert_eq!(bust.value(), 22);

    let twenty_one = hand_of(&[
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert_eq!(twenty_one.value(), 21);
    assert!(!twenty_one.is_bust());
    assert!(!twenty_one.is_blackjack());
}

#[test]
fn hand_capacity_and_display() {
    let mut hand = Hand::new();
    assert_eq!(hand.to_string(), "[Empty Hand]");

    for _ in 0..MAX_HAND_SIZE {
        hand.add_card(card(Suit::Hearts, Rank::Two)).unwrap();
    }
    assert_eq!(
        hand.add_card(card(Suit::Hearts, Rank::Three)).unwrap_err(),
        HandError::CapacityExceeded { max: MAX_HAND_SIZE }
    );
    assert_eq!(hand.len(), MAX_HAND_SIZE);

    hand.clear();
    assert!(hand.is_empty());

    let shown = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::King)]);
    assert_eq!(shown.to_string(), "[AH] [KS] (Value: 21)");
}

#[test]
fn fresh_shoe_holds_every_card_once() {
    let mut shoe = Shoe::new(42);
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = shoe.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for drawn in 1..=DECK_SIZE {
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining() + drawn, DECK_SIZE);
    }
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw().unwrap_err(), DrawError::EmptyShoe);

    shoe.reset();
    assert_eq!(shoe.remaining(), DECK_SIZE);
}

#[test]
fn shoe_is_reproducible_from_seed() {
    let first: Vec<Card> = Shoe::new(7).iter().copied().collect();
    let second: Vec<Card> = Shoe::new(7).iter().copied().collect();
    let other: Vec<Card> = Shoe::new(8).iter().copied().collect();
    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn stacked_shoe_deals_in_order_and_validates() {
    let mut shoe = Shoe::stacked(
        1,
        &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Three)],
    )
    .unwrap();
    assert_eq!(shoe.draw().unwrap(), card(Suit::Hearts, Rank::Two));
    assert_eq!(shoe.draw().unwrap(), card(Suit::Clubs, Rank::Three));
    assert!(shoe.needs_reshuffle(1));

    let duplicate = Shoe::stacked(
        1,
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Two)],
    );
    assert_eq!(
        duplicate.unwrap_err(),
        ShoeError::DuplicateCard(card(Suit::Hearts, Rank::Two))
    );

    let too_many = vec![card(Suit::Hearts, Rank::Two); DECK_SIZE + 1];
    assert_eq!(
        Shoe::stacked(1, &too_many).unwrap_err(),
        ShoeError::CapacityExceeded {
            max: DECK_SIZE,
            len: DECK_SIZE + 1
        }
    );
}

#[test]
fn reset_excluding_leaves_out_held_cards() {
    let held = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Ten)];
    let mut shoe = Shoe::stacked(4, &[]).unwrap();

    shoe.reset_excluding(&held);
    assert_eq!(shoe.remaining(), DECK_SIZE - held.len());
    assert!(shoe.iter().all(|card| !held.contains(card)));

    let unique: HashSet<Card> = shoe.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE - held.len());
}

#[test]
fn player_betting_rules() {
    let mut player = Player::new("Ada", 50);
    assert_eq!(player.kind(), ParticipantKind::Human);
    assert!(!player.has_bet());

    assert_eq!(player.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        player.place_bet(51).unwrap_err(),
        BetError::ExceedsBalance { balance: 50 }
    );
    assert_eq!(player.current_bet(), 0);

    player.place_bet(50).unwrap();
    assert_eq!(player.current_bet(), 50);
    assert_eq!(player.points(), 50);

    player.clear_bet();
    assert_eq!(player.current_bet(), 0);
}

#[test]
fn player_points_never_go_negative() {
    let mut player = Player::new("Ada", 30);

    assert_eq!(
        player.remove_points(31).unwrap_err(),
        PointsError::InsufficientPoints {
            balance: 30,
            requested: 31
        }
    );
    assert_eq!(player.points(), 30);

    assert_eq!(player.add_points(0).unwrap_err(), PointsError::ZeroAmount);
    assert_eq!(player.remove_points(0).unwrap_err(), PointsError::ZeroAmount);

    player.remove_points(30).unwrap();
    assert!(!player.has_points());
    player.add_points(15).unwrap();
    assert_eq!(player.points(), 15);
}

#[test]
fn balance_is_capped_at_the_limit() {
    let mut player = Player::new("Ada", usize::MAX);
    assert_eq!(player.points(), MAX_POINTS);
    assert_eq!(
        player.add_points(1).unwrap_err(),
        PointsError::LimitExceeded { max: MAX_POINTS }
    );
    assert_eq!(player.points(), MAX_POINTS);

    player.remove_points(MAX_POINTS).unwrap();
    assert_eq!(
        player.add_points(usize::MAX).unwrap_err(),
        PointsError::LimitExceeded { max: MAX_POINTS }
    );
    player.add_points(MAX_POINTS).unwrap();
    assert_eq!(player.points(), MAX_POINTS);
}

#[test]
fn player_reset_clears_round_state() {
    let mut player = Player::new("Ada", 100);
    player.place_bet(10).unwrap();
    player.receive(card(Suit::Hearts, Rank::Five)).unwrap();
    player.stand();

    player.reset_for_new_round();
    assert!(player.hand().is_empty());
    assert_eq!(player.current_bet(), 0);
    assert!(!player.is_standing());
    assert_eq!(player.points(), 100);
}

#[test]
fn dealer_policy_hits_below_seventeen() {
    let policy = DealerPolicy::default();
    let sixteen = hand_of(&[card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Six)]);
    let seventeen = hand_of(&[card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Seven)]);
    let soft_seventeen = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Six)]);

    assert!(policy.should_hit(&sixteen));
    assert!(!policy.should_hit(&seventeen));
    assert!(!policy.should_hit(&soft_seventeen));
}

#[test]
fn dealer_plays_to_completion_then_stands() {
    let mut dealer = Dealer::default();
    assert_eq!(dealer.kind(), ParticipantKind::Dealer);
    dealer.receive(card(Suit::Hearts, Rank::Two)).unwrap();
    dealer.receive(card(Suit::Spades, Rank::Three)).unwrap();
    assert_eq!(dealer.visible_value(), 2);

    let mut shoe = Shoe::stacked(
        1,
        &[
            card(Suit::Clubs, Rank::Four),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Clubs, Rank::King),
            card(Suit::Diamonds, Rank::Ace),
        ],
    )
    .unwrap();

    assert_eq!(dealer.state(), DealerState::Playing);
    let drawn = dealer.play(&mut shoe).unwrap();
    assert_eq!(drawn.len(), 3);
    assert_eq!(dealer.hand().value(), 24);
    assert!(dealer.hand().is_bust());
    assert_eq!(dealer.state(), DealerState::Standing);
    assert!(!dealer.should_hit());
    assert_eq!(shoe.remaining(), 1);
    assert!(dealer.is_hole_revealed());

    dealer.reset_for_new_round();
    assert!(dealer.hand().is_empty());
    assert_eq!(dealer.state(), DealerState::Playing);
}

#[test]
fn dealer_play_reports_empty_shoe() {
    let mut dealer = Dealer::default();
    dealer.receive(card(Suit::Hearts, Rank::Ten)).unwrap();
    dealer.receive(card(Suit::Spades, Rank::Two)).unwrap();

    let mut shoe = Shoe::stacked(1, &[]).unwrap();
    assert_eq!(
        dealer.play(&mut shoe).unwrap_err(),
        ShowdownError::Draw(DrawError::EmptyShoe)
    );
}
