//! Error types for table operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing from a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors that can occur when building a shoe from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// More cards than a single deck holds.
    #[error("a shoe holds at most {max} cards, got {len}")]
    CapacityExceeded {
        /// Maximum shoe size.
        max: usize,
        /// Number of cards supplied.
        len: usize,
    },
    /// The same card appears twice.
    #[error("duplicate card {0} in shoe")]
    DuplicateCard(Card),
}

/// Errors that can occur when adding cards to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand already holds its maximum number of cards.
    #[error("hand is full ({max} cards)")]
    CapacityExceeded {
        /// Maximum hand size.
        max: usize,
    },
}

/// Errors that can occur when changing a point balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointsError {
    /// Amount is zero.
    #[error("amount is zero")]
    ZeroAmount,
    /// Balance is lower than the amount to remove.
    #[error("insufficient points: balance {balance}, requested {requested}")]
    InsufficientPoints {
        /// Current balance.
        balance: usize,
        /// Amount requested.
        requested: usize,
    },
    /// The amount is above the balance ceiling.
    #[error("amount exceeds the {max}-point limit")]
    LimitExceeded {
        /// Balance ceiling.
        max: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet exceeds the player's balance.
    #[error("bet exceeds balance of {balance}")]
    ExceedsBalance {
        /// Current balance.
        balance: usize,
    },
    /// Player has no points left.
    #[error("player has no points left")]
    NoPoints,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join before the first round.
    #[error("players can only join before the first round")]
    InvalidState,
    /// All seats are taken.
    #[error("table is full ({max} players)")]
    TableFull {
        /// Maximum number of players.
        max: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// Drawing a card failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Adding a card to a hand failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Drawing a card failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Adding a card to a hand failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// Drawing a card failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Adding a card to a hand failed.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// Applying a point delta failed.
    #[error(transparent)]
    Points(#[from] PointsError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is in progress or the session is over.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// Nobody is seated.
    #[error("no players at the table")]
    NoPlayers,
}
