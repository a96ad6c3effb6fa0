//! The drawable card source for a session.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::{DrawError, ShoeError};

/// Remaining-card count below which the shoe is rebuilt at round start.
pub const RESHUFFLE_THRESHOLD: usize = 15;

/// A source that hands out cards one at a time.
pub trait Drawable {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyShoe`] if no cards remain.
    fn draw(&mut self) -> Result<Card, DrawError>;

    /// Returns the number of cards left.
    fn remaining(&self) -> usize;
}

/// A single shuffled deck of 52 unique cards.
///
/// Cards are drawn from the head. The shoe is never topped up; [`Shoe::reset`]
/// replaces its contents with a freshly shuffled full deck.
#[derive(Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a full, shuffled shoe driven by the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(&mut rng, &[]);
        Self { cards, rng }
    }

    /// Creates a shoe that deals `cards` in order, first element first.
    ///
    /// Once the stacked cards run out, [`Shoe::reset`] falls back to a full deck
    /// shuffled with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if more than [`DECK_SIZE`] cards are given or a card
    /// appears twice.
    pub fn stacked(seed: u64, cards: &[Card]) -> Result<Self, ShoeError> {
        if cards.len() > DECK_SIZE {
            return Err(ShoeError::CapacityExceeded {
                max: DECK_SIZE,
                len: cards.len(),
            });
        }

        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(ShoeError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            cards: cards.iter().copied().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    fn build(rng: &mut ChaCha8Rng, held: &[Card]) -> VecDeque<Card> {
        let mut cards: Vec<Card> = standard_deck().filter(|card| !held.contains(card)).collect();
        cards.shuffle(rng);
        debug!("built and shuffled a {}-card shoe", cards.len());
        cards.into()
    }

    /// Discards the current contents and rebuilds a full shuffled deck.
    pub fn reset(&mut self) {
        self.cards = Self::build(&mut self.rng, &[]);
    }

    /// Discards the current contents and rebuilds a shuffled deck without the
    /// `held` cards, for use while those cards are still on the table.
    pub fn reset_excluding(&mut self, held: &[Card]) {
        self.cards = Self::build(&mut self.rng, held);
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the undrawn cards, next card first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Drawable for Shoe {
    fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or_else(|| {
            warn!("draw attempted on an empty shoe");
            DrawError::EmptyShoe
        })
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl fmt::Debug for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shoe")
            .field("remaining", &self.cards.len())
            .finish_non_exhaustive()
    }
}
