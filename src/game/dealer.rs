use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::ValuedHand;
use crate::player::{Bettor, MAX_POINTS};
use crate::resolution::{HandSnapshot, resolve};
use crate::result::{PlayerResult, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Checks if any player with a bet is still in the round (not busted).
    fn any_live_hands(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.has_bet() && !player.hand().is_bust())
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching the stand
    /// value. If every player has busted the dealer does not draw.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if !self.any_live_hands() {
            debug!("all players busted, dealer stands");
            self.dealer.reveal_hole();
            self.dealer.stand();
            self.state = GameState::RoundOver;
            return Ok(Vec::new());
        }

        let drawn = self.dealer.play(&mut self.shoe)?;
        debug!(
            "dealer stands on {} after drawing {} card(s)",
            self.dealer.hand().value(),
            drawn.len()
        );

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Resolves every player with a bet against the dealer and applies the
    /// point changes.
    ///
    /// Bets are cleared afterwards. Winnings are credited up to
    /// [`MAX_POINTS`](crate::MAX_POINTS). The session ends if a player reached
    /// the winning target or nobody has points left.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = HandSnapshot::of(self.dealer.hand());
        let mut player_results = Vec::new();

        for (player_id, player) in self.players.iter_mut().enumerate() {
            let bet = player.current_bet();
            if bet == 0 {
                continue;
            }

            let resolution = resolve(HandSnapshot::of(player.hand()), bet, dealer)?;
            let amount = resolution.delta.unsigned_abs();
            if resolution.delta > 0 {
                let credit = amount.min(MAX_POINTS - player.points());
                if credit < amount {
                    debug!("{} reached the {MAX_POINTS}-point limit", player.name());
                }
                if credit > 0 {
                    player.add_points(credit)?;
                }
            } else if resolution.delta < 0 {
                player.remove_points(amount)?;
            }
            player.clear_bet();

            info!(
                "{}: {resolution} ({:+} points, balance {})",
                player.name(),
                resolution.delta,
                player.points()
            );

            player_results.push(PlayerResult {
                player_id,
                name: player.name().into(),
                bet,
                player_value: player.hand().value(),
                resolution,
                points: player.points(),
            });
        }

        self.state = if self.session_finished() {
            GameState::GameOver
        } else {
            GameState::WaitingForPlayers
        };

        Ok(RoundResult {
            round: self.round,
            players: player_results,
            dealer_value: dealer.value,
            dealer_bust: dealer.busted,
            dealer_blackjack: dealer.blackjack,
        })
    }
}
