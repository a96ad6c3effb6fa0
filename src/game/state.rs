//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; players may join before the first round.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
    /// A player reached the target or every player is out of points.
    GameOver,
}
