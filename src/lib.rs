//! A blackjack table for one or two bettors against an automated dealer,
//! with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting, dealing, player turns, the dealer's fixed drawing policy, and
//! settlement. The pieces it is built from are usable on their own: a seeded
//! [`Shoe`], [`Hand`] valuation through [`ValuedHand`], [`Player`] balances
//! through [`Bettor`], and the pure [`resolve`] function that decides each
//! hand against the dealer's.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let player = game.join("Ada").unwrap();
//!
//! game.start_round().unwrap();
//! game.bet(player, 10).unwrap();
//! game.deal().unwrap();
//!
//! while game.state() == GameState::PlayerTurn {
//!     game.stand(player).unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! let result = game.settle().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod resolution;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DEALER_STAND_VALUE, Dealer, DealerPolicy, DealerState};
pub use error::{
    ActionError, BetError, DealError, DrawError, HandError, JoinError, PointsError,
    ReshuffleError, RoundError, ShoeError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK_VALUE, Hand, MAX_HAND_SIZE, ValuedHand};
pub use options::{GameOptions, MAX_SEATS};
pub use player::{Bettor, MAX_POINTS, ParticipantKind, Player};
pub use resolution::{HandSnapshot, Outcome, OutcomeReason, Resolution, blackjack_payout, resolve};
pub use result::{GameSummary, PlayerResult, RoundResult, Standing, StandingStatus, WinKind};
pub use shoe::{Drawable, RESHUFFLE_THRESHOLD, Shoe};
