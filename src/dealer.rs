//! The house dealer and its fixed drawing policy.

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::{HandError, ShowdownError};
use crate::hand::{Hand, ValuedHand};
use crate::player::ParticipantKind;
use crate::shoe::Drawable;

/// Total at which the dealer stops drawing.
pub const DEALER_STAND_VALUE: u8 = 17;

/// The dealer's drawing rule: hit while the hand is below `stand_value`.
///
/// The rule never looks at any player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    /// Total at or above which the dealer stands.
    pub stand_value: u8,
}

impl DealerPolicy {
    /// Creates a policy that stands at `stand_value`.
    #[must_use]
    pub const fn new(stand_value: u8) -> Self {
        Self { stand_value }
    }

    /// Returns whether a hand under this policy must take another card.
    #[must_use]
    pub fn should_hit(&self, hand: &impl ValuedHand) -> bool {
        hand.value() < self.stand_value
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(DEALER_STAND_VALUE)
    }
}

/// Dealer automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Still drawing.
    Playing,
    /// Done for the round.
    Standing,
}

/// The dealer's seat.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    policy: DealerPolicy,
    state: DealerState,
    hole_revealed: bool,
}

impl Dealer {
    /// Creates a dealer following `policy`.
    #[must_use]
    pub const fn new(policy: DealerPolicy) -> Self {
        Self {
            hand: Hand::new(),
            policy,
            state: DealerState::Playing,
            hole_revealed: false,
        }
    }

    /// Returns the dealer's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        "Dealer"
    }

    /// Returns the seat kind.
    #[must_use]
    pub const fn kind(&self) -> ParticipantKind {
        ParticipantKind::Dealer
    }

    /// Returns the dealer's full hand, including the hole card.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the drawing policy.
    #[must_use]
    pub const fn policy(&self) -> DealerPolicy {
        self.policy
    }

    /// Returns the automaton state.
    #[must_use]
    pub const fn state(&self) -> DealerState {
        self.state
    }

    /// Adds a dealt card to the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is full.
    pub fn receive(&mut self, card: Card) -> Result<(), HandError> {
        self.hand.add_card(card)
    }

    /// Returns whether the dealer must draw another card.
    #[must_use]
    pub fn should_hit(&self) -> bool {
        self.state == DealerState::Playing && self.policy.should_hit(&self.hand)
    }

    /// Draws until the policy says stand, then stands for the rest of the round.
    ///
    /// Runs to completion without pausing and returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the source runs dry or the hand is full. Cards
    /// drawn before the failure stay in the hand.
    pub fn play(&mut self, shoe: &mut impl Drawable) -> Result<Vec<Card>, ShowdownError> {
        self.hole_revealed = true;
        let mut drawn = Vec::new();

        while self.should_hit() {
            let card = shoe.draw()?;
            self.hand.add_card(card)?;
            debug!("dealer draws {card}, total {}", self.hand.value());
            drawn.push(card);
        }

        self.stand();
        Ok(drawn)
    }

    /// Stops drawing for the rest of the round.
    pub const fn stand(&mut self) {
        self.state = DealerState::Standing;
    }

    /// Returns whether the dealer has stopped drawing.
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.state == DealerState::Standing
    }

    /// Returns the face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the value a player can see: the up card alone until the hole
    /// card is revealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.hand.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Clears the hand and returns the automaton to [`DealerState::Playing`].
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.state = DealerState::Playing;
        self.hole_revealed = false;
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DealerPolicy::default())
    }
}
