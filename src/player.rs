//! Human bettors and their point balances.

use alloc::string::String;

use crate::card::Card;
use crate::error::{BetError, HandError, PointsError};
use crate::hand::Hand;

/// Largest balance a player can hold.
///
/// Every bet and payout up to this ceiling fits in a signed [`isize`] delta.
pub const MAX_POINTS: usize = usize::MAX / 4;

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    /// A human bettor.
    Human,
    /// The house dealer.
    Dealer,
}

/// A participant that wagers points on a round.
///
/// The balance is never negative and a bet never exceeds the balance at the
/// time it is placed.
pub trait Bettor {
    /// Returns the current point balance.
    fn points(&self) -> usize;

    /// Returns the bet for the current round (0 if none).
    fn current_bet(&self) -> usize;

    /// Places the bet for the current round.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero amount and
    /// [`BetError::ExceedsBalance`] if the amount is above the balance. The
    /// current bet is unchanged on error.
    fn place_bet(&mut self, amount: usize) -> Result<(), BetError>;

    /// Adds points to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`PointsError::ZeroAmount`] if `amount` is zero and
    /// [`PointsError::LimitExceeded`] if the new balance would pass
    /// [`MAX_POINTS`]. The balance is unchanged on error.
    fn add_points(&mut self, amount: usize) -> Result<(), PointsError>;

    /// Removes points from the balance.
    ///
    /// # Errors
    ///
    /// Returns [`PointsError::ZeroAmount`] if `amount` is zero and
    /// [`PointsError::InsufficientPoints`] if the balance is lower than
    /// `amount`. The balance is unchanged on error.
    fn remove_points(&mut self, amount: usize) -> Result<(), PointsError>;

    /// Clears the current bet.
    fn clear_bet(&mut self);

    /// Returns whether any points are left.
    fn has_points(&self) -> bool {
        self.points() > 0
    }

    /// Returns whether a bet is placed for this round.
    fn has_bet(&self) -> bool {
        self.current_bet() > 0
    }
}

/// A human player seated at the table.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    points: usize,
    bet: usize,
    standing: bool,
}

impl Player {
    /// Creates a player with the given starting balance, capped at [`MAX_POINTS`].
    #[must_use]
    pub fn new(name: impl Into<String>, points: usize) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            points: points.min(MAX_POINTS),
            bet: 0,
            standing: false,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat kind.
    #[must_use]
    pub const fn kind(&self) -> ParticipantKind {
        ParticipantKind::Human
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is full.
    pub fn receive(&mut self, card: Card) -> Result<(), HandError> {
        self.hand.add_card(card)
    }

    /// Ends the player's turn.
    pub const fn stand(&mut self) {
        self.standing = true;
    }

    /// Returns whether the player has stood this round.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Clears the hand, the bet, and the standing flag.
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.standing = false;
    }

    /// Forfeits the remaining balance, leaving the player eliminated.
    pub const fn forfeit(&mut self) {
        self.points = 0;
        self.bet = 0;
    }
}

impl Bettor for Player {
    fn points(&self) -> usize {
        self.points
    }

    fn current_bet(&self) -> usize {
        self.bet
    }

    fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.points {
            return Err(BetError::ExceedsBalance {
                balance: self.points,
            });
        }
        self.bet = amount;
        Ok(())
    }

    fn add_points(&mut self, amount: usize) -> Result<(), PointsError> {
        if amount == 0 {
            return Err(PointsError::ZeroAmount);
        }
        self.points = self
            .points
            .checked_add(amount)
            .filter(|&points| points <= MAX_POINTS)
            .ok_or(PointsError::LimitExceeded { max: MAX_POINTS })?;
        Ok(())
    }

    fn remove_points(&mut self, amount: usize) -> Result<(), PointsError> {
        if amount == 0 {
            return Err(PointsError::ZeroAmount);
        }
        self.points = self
            .points
            .checked_sub(amount)
            .ok_or(PointsError::InsufficientPoints {
                balance: self.points,
                requested: amount,
            })?;
        Ok(())
    }

    fn clear_bet(&mut self) {
        self.bet = 0;
    }
}
