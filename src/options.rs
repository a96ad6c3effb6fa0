//! Table configuration options.

use crate::dealer::DEALER_STAND_VALUE;
use crate::player::MAX_POINTS;
use crate::shoe::RESHUFFLE_THRESHOLD;

/// Most players a table seats.
pub const MAX_SEATS: usize = 2;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_points(250)
///     .with_winning_points(500)
///     .with_max_players(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Points each player starts with.
    pub starting_points: usize,
    /// Balance at which a player wins the session.
    pub winning_points: usize,
    /// The shoe is rebuilt at round start when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Total at which the dealer stands.
    pub dealer_stand_value: u8,
    /// Maximum number of seated players, between 1 and [`MAX_SEATS`].
    pub max_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_points: 100,
            winning_points: 200,
            reshuffle_threshold: RESHUFFLE_THRESHOLD,
            dealer_stand_value: DEALER_STAND_VALUE,
            max_players: MAX_SEATS,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance, capped at [`MAX_POINTS`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, MAX_POINTS};
    ///
    /// let options = GameOptions::default().with_starting_points(50);
    /// assert_eq!(options.starting_points, 50);
    ///
    /// let capped = GameOptions::default().with_starting_points(usize::MAX);
    /// assert_eq!(capped.starting_points, MAX_POINTS);
    /// ```
    #[must_use]
    pub const fn with_starting_points(mut self, points: usize) -> Self {
        self.starting_points = if points > MAX_POINTS {
            MAX_POINTS
        } else {
            points
        };
        self
    }

    /// Sets the winning target.
    #[must_use]
    pub const fn with_winning_points(mut self, points: usize) -> Self {
        self.winning_points = points;
        self
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stand_value(mut self, value: u8) -> Self {
        self.dealer_stand_value = value;
        self
    }

    /// Sets the maximum number of players, clamped to `1..=MAX_SEATS`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, MAX_SEATS};
    ///
    /// assert_eq!(GameOptions::default().with_max_players(0).max_players, 1);
    /// assert_eq!(GameOptions::default().with_max_players(5).max_players, MAX_SEATS);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, players: usize) -> Self {
        self.max_players = if players == 0 {
            1
        } else if players > MAX_SEATS {
            MAX_SEATS
        } else {
            players
        };
        self
    }
}
