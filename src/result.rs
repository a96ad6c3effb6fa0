//! Round and session result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::resolution::Resolution;

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: usize,
    /// The player's name.
    pub name: String,
    /// The bet that was resolved.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// Outcome, deciding rule, and point delta.
    pub resolution: Resolution,
    /// Balance after the delta was applied.
    pub points: usize,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Results for each player who had a bet.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

/// A player's position at the end of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingStatus {
    /// Reached the winning target.
    Winner,
    /// Ran out of points.
    Eliminated,
    /// Still holding points below the target.
    Active,
}

/// One line of the final standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player ID.
    pub player_id: usize,
    /// The player's name.
    pub name: String,
    /// Final balance.
    pub points: usize,
    /// Winner, eliminated, or still active.
    pub status: StandingStatus,
}

/// How the session winner was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinKind {
    /// Reached the winning points target.
    Target,
    /// Held the most points when play stopped.
    MostPoints,
}

/// End-of-session report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Rounds played.
    pub rounds: u32,
    /// Standings in seating order.
    pub standings: Vec<Standing>,
    /// Winning player ID and how they won, or `None` if everyone is out.
    pub winner: Option<(usize, WinKind)>,
}
