use log::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::ValuedHand;

use super::{Game, GameState, awaiting_action};

impl Game {
    fn ensure_player_turn(&self, player_id: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let player = self
            .players
            .get(player_id)
            .ok_or(ActionError::PlayerNotFound)?;

        if self.current_turn != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        if !awaiting_action(player) {
            return Err(ActionError::HandNotActive);
        }

        Ok(())
    }

    /// Moves the turn to the next player who still has to act, or hands over
    /// to the dealer.
    fn advance_turn(&mut self) {
        let start = self.current_turn.map_or(0, |id| id + 1);
        self.current_turn = self
            .players
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, player)| awaiting_action(player))
            .map(|(player_id, _)| player_id);

        if self.current_turn.is_none() {
            self.state = GameState::DealerTurn;
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, it is not the player's turn, or the shoe is empty.
    pub fn hit(&mut self, player_id: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player_id)?;

        let card = self.draw()?;
        let player = &mut self.players[player_id];
        player.receive(card)?;

        let busted = player.hand().is_bust();
        if busted {
            info!("{} busts with {}", player.name(), player.hand().value());
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the player
    /// cannot be found, or it is not the player's turn.
    pub fn stand(&mut self, player_id: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(player_id)?;

        let player = &mut self.players[player_id];
        player.stand();
        debug!("{} stands on {}", player.name(), player.hand().value());

        self.advance_turn();
        Ok(())
    }
}
