//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::dealer::{Dealer, DealerPolicy};
use crate::error::{DrawError, JoinError, ReshuffleError, RoundError};
use crate::hand::ValuedHand;
use crate::options::GameOptions;
use crate::player::{Bettor, Player};
use crate::result::{GameSummary, Standing, StandingStatus, WinKind};
use crate::shoe::{Drawable, Shoe};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A blackjack table that sequences rounds for up to
/// [`GameOptions::max_players`] bettors against an automated dealer.
///
/// The game owns the shoe, every player, and the dealer. A round runs
/// [`start_round`](Self::start_round), [`bet`](Self::bet), [`deal`](Self::deal),
/// [`hit`](Self::hit) / [`stand`](Self::stand), [`dealer_play`](Self::dealer_play),
/// then [`settle`](Self::settle).
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    options: GameOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Seated players; a player's ID is their seat index.
    players: Vec<Player>,
    /// The house dealer.
    dealer: Dealer,
    /// Current game state.
    state: GameState,
    /// Rounds started so far.
    round: u32,
    /// Player whose turn it is.
    current_turn: Option<usize>,
}

impl Game {
    /// Creates a new game with a shoe shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let id = game.join("Ada").unwrap();
    /// assert_eq!(game.player(id).unwrap().name(), "Ada");
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_shoe(options, Shoe::new(seed))
    }

    /// Creates a new game that draws from the given shoe.
    ///
    /// The seat count and starting balance are clamped as by the
    /// [`GameOptions`] setters.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        let options = options
            .with_max_players(options.max_players)
            .with_starting_points(options.starting_points);
        Self {
            options,
            shoe,
            players: Vec::new(),
            dealer: Dealer::new(DealerPolicy::new(options.dealer_stand_value)),
            state: GameState::WaitingForPlayers,
            round: 0,
            current_turn: None,
        }
    }

    /// Seats a player with the configured starting balance.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error once the first round has started or when every seat is taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<usize, JoinError> {
        if self.state != GameState::WaitingForPlayers || self.round > 0 {
            return Err(JoinError::InvalidState);
        }
        if self.players.len() >= self.options.max_players {
            return Err(JoinError::TableFull {
                max: self.options.max_players,
            });
        }

        let player = Player::new(name, self.options.starting_points);
        info!("{} joins with {} points", player.name(), player.points());
        self.players.push(player);
        Ok(self.players.len() - 1)
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// Between rounds the shoe is rebuilt from a full deck. During player or
    /// dealer turns a shoe that has run dry can be rebuilt from the cards not
    /// held in any hand, after which the failed draw can be retried.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress, unless it is a player or
    /// dealer turn and the shoe is empty.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        match self.state {
            GameState::WaitingForPlayers | GameState::Betting => self.shoe.reset(),
            GameState::PlayerTurn | GameState::DealerTurn if self.shoe.is_empty() => {
                let held: Vec<Card> = self
                    .players
                    .iter()
                    .flat_map(|player| player.hand().iter())
                    .chain(self.dealer.hand().iter())
                    .copied()
                    .collect();
                self.shoe.reset_excluding(&held);
                info!(
                    "shoe ran out mid-round, reshuffled {} cards not in play",
                    self.shoe.remaining()
                );
            }
            _ => return Err(ReshuffleError::InvalidState),
        }
        Ok(())
    }

    /// Returns whether the shoe has dropped below the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle(self.options.reshuffle_threshold)
    }

    /// Checks the threshold and reshuffles if needed.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            debug!("shoe below {} cards, reshuffled", self.options.reshuffle_threshold);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Starts a new round: clears every hand and bet, reshuffles if the shoe is
    /// low, and opens betting.
    ///
    /// Returns `true` if the shoe was reshuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, the session is over, or
    /// nobody is seated.
    pub fn start_round(&mut self) -> Result<bool, RoundError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(RoundError::InvalidState);
        }
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        self.dealer.reset_for_new_round();
        for player in &mut self.players {
            player.reset_for_new_round();
        }
        self.current_turn = None;

        let reshuffled = self
            .check_and_reshuffle()
            .map_err(|_| RoundError::InvalidState)?;

        self.round += 1;
        self.state = GameState::Betting;
        info!("round {} started", self.round);
        Ok(reshuffled)
    }

    fn draw(&mut self) -> Result<Card, DrawError> {
        self.shoe.draw()
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the seated players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside the player-turn phase.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.current_turn
    }

    /// Returns whether the session has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns whether the end-of-session condition holds: a player reached the
    /// winning target or nobody has points left.
    fn session_finished(&self) -> bool {
        let target = self.options.winning_points;
        self.players.iter().any(|p| p.points() >= target)
            || !self.players.iter().any(Bettor::has_points)
    }

    /// Builds the end-of-session report from the current balances.
    ///
    /// The winner is the player with the most points (earliest seat on a tie);
    /// there is no winner if everyone is out.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let target = self.options.winning_points;

        let standings = self
            .players
            .iter()
            .enumerate()
            .map(|(player_id, player)| Standing {
                player_id,
                name: player.name().into(),
                points: player.points(),
                status: if player.points() >= target {
                    StandingStatus::Winner
                } else if player.has_points() {
                    StandingStatus::Active
                } else {
                    StandingStatus::Eliminated
                },
            })
            .collect();

        let mut leader: Option<(usize, usize)> = None;
        for (player_id, player) in self.players.iter().enumerate() {
            let points = player.points();
            if points > leader.map_or(0, |(_, best)| best) {
                leader = Some((player_id, points));
            }
        }

        let winner = leader.map(|(player_id, points)| {
            let kind = if points >= target {
                WinKind::Target
            } else {
                WinKind::MostPoints
            };
            (player_id, kind)
        });

        GameSummary {
            rounds: self.round,
            standings,
            winner,
        }
    }
}

/// Returns whether a player still has to act this round.
fn awaiting_action(player: &Player) -> bool {
    player.has_bet() && !player.is_standing() && !player.hand().is_bust()
}
