//! Hand representation and evaluation.

use alloc::vec::Vec;
use core::fmt;

use log::warn;

use crate::card::Card;
use crate::error::HandError;

/// Maximum number of cards a hand may hold.
pub const MAX_HAND_SIZE: usize = 21;

/// Highest non-bust total.
pub const BLACKJACK_VALUE: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK_VALUE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK_VALUE;
    (value, is_soft)
}

/// Anything whose cards can be valued as a blackjack hand.
pub trait ValuedHand {
    /// Returns the cards in the hand.
    fn cards(&self) -> &[Card];

    /// Calculates the value of the hand.
    ///
    /// Aces count 11, then are downgraded to 1 one at a time while the total
    /// is over 21.
    fn value(&self) -> u8 {
        evaluate_cards(self.cards()).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    fn is_soft(&self) -> bool {
        evaluate_cards(self.cards()).1
    }

    /// Returns whether the hand is bust (over 21).
    fn is_bust(&self) -> bool {
        self.value() > BLACKJACK_VALUE
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    fn is_blackjack(&self) -> bool {
        self.cards().len() == 2 && self.value() == BLACKJACK_VALUE
    }
}

/// The cards held by one participant for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CapacityExceeded`] if the hand already holds
    /// [`MAX_HAND_SIZE`] cards; the hand is left unchanged.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= MAX_HAND_SIZE {
            warn!("rejected {card}: hand already holds {MAX_HAND_SIZE} cards");
            return Err(HandError::CapacityExceeded { max: MAX_HAND_SIZE });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns an iterator over the cards in deal order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl ValuedHand for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shows every card and the total, e.g. `[AH] [KS] (Value: 21)`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("[Empty Hand]");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{card}]")?;
        }
        write!(f, " (Value: {})", self.value())
    }
}
