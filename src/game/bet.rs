use alloc::vec::Vec;

use log::{debug, info};

use crate::error::{BetError, DealError};
use crate::hand::ValuedHand;
use crate::player::Bettor;

use super::{Game, GameState, awaiting_action};

impl Game {
    /// Places a bet for the specified player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the player cannot
    /// be found, the player has no points, the bet is zero, or the bet exceeds
    /// the player's balance.
    pub fn bet(&mut self, player_id: usize, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self
            .players
            .get_mut(player_id)
            .ok_or(BetError::PlayerNotFound)?;

        if !player.has_points() {
            return Err(BetError::NoPoints);
        }

        player.place_bet(amount)?;
        info!("{} bets {amount}", player.name());
        Ok(())
    }

    /// Withdraws the player from the session, forfeiting their balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the player cannot
    /// be found.
    pub fn quit(&mut self, player_id: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self
            .players
            .get_mut(player_id)
            .ok_or(BetError::PlayerNotFound)?;
        player.forfeit();
        info!("{} quits", player.name());
        Ok(())
    }

    /// Deals two cards to every player with a bet and to the dealer, one at a
    /// time: each player then the dealer, twice.
    ///
    /// A dealer blackjack ends the round at once. Players dealt a blackjack
    /// stand automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bets have been
    /// placed, or there are not enough cards in the shoe. When nobody has
    /// points left the session ends.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        let betting_players: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.has_bet())
            .map(|(player_id, _)| player_id)
            .collect();

        if betting_players.is_empty() {
            if self.session_finished() {
                info!("no bets and no points left, session over");
                self.state = GameState::GameOver;
            }
            return Err(DealError::NoBets);
        }

        let cards_needed = (betting_players.len() + 1) * 2;
        if self.cards_remaining() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            for &player_id in &betting_players {
                let card = self.draw()?;
                self.players[player_id].receive(card)?;
            }
            let card = self.draw()?;
            self.dealer.receive(card)?;
        }

        if self.dealer.hand().is_blackjack() {
            debug!("dealer has blackjack, skipping player turns");
            self.dealer.reveal_hole();
            self.dealer.stand();
            self.current_turn = None;
            self.state = GameState::RoundOver;
            return Ok(());
        }

        for &player_id in &betting_players {
            let player = &mut self.players[player_id];
            if player.hand().is_blackjack() {
                debug!("{} has blackjack", player.name());
                player.stand();
            }
        }

        self.current_turn = self.players.iter().position(awaiting_action);
        self.state = if self.current_turn.is_some() {
            GameState::PlayerTurn
        } else {
            GameState::DealerTurn
        };

        Ok(())
    }
}
