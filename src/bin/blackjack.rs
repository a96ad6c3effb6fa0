//! Interactive blackjack table for one or two players.

use core::fmt;
use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::{
    ActionError, Bettor, Card, DealError, DrawError, Game, GameOptions, GameState, GameSummary,
    ShowdownError, StandingStatus, ValuedHand, WinKind,
};
use clap::Parser;
use log::{error, info};

#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about = "Play blackjack against an automated dealer")]
struct Cli {
    /// Number of players (prompted for when omitted)
    #[arg(long, env = "BLACKJACK_PLAYERS", value_parser = clap::value_parser!(u8).range(1..=2))]
    players: Option<u8>,

    /// Player name, repeat once per seat (prompted for when omitted)
    #[arg(long = "name")]
    names: Vec<String>,

    /// Shuffle seed (defaults to the current time)
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Points each player starts with
    #[arg(long, default_value_t = 100)]
    starting_points: usize,

    /// Points needed to win the session
    #[arg(long, default_value_t = 200)]
    winning_points: usize,

    /// Pause between dealer draws, in milliseconds
    #[arg(long, default_value_t = 1000)]
    dealer_delay_ms: u64,
}

/// How players are seated before the first round.
#[derive(Debug, Default)]
struct Seating {
    players: Option<u8>,
    names: Vec<String>,
}

/// Drives a [`Game`] over a line-based text interface.
struct Table<R, W> {
    game: Game,
    input: R,
    output: W,
    dealer_delay: Duration,
}

impl<R: BufRead, W: Write> Table<R, W> {
    const fn new(game: Game, input: R, output: W, dealer_delay: Duration) -> Self {
        Self {
            game,
            input,
            output,
            dealer_delay,
        }
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads numbers until one falls in `min..=max`; `None` at end of input.
    fn read_number(&mut self, min: usize, max: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => write!(
                    self.output,
                    "Please enter a number between {min} and {max}: "
                )?,
                Err(_) => write!(self.output, "Invalid input. Please enter a number: ")?,
            }
        }
    }

    fn run(&mut self, seating: Seating) -> io::Result<()> {
        self.print_welcome()?;
        if self.seat_players(seating)? {
            while !self.game.is_over() {
                if !self.play_round()? {
                    break;
                }
            }
        }
        let summary = self.game.summary();
        self.print_summary(&summary)
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        let target = self.game.options().winning_points;
        writeln!(self.output, "WELCOME TO BLACKJACK!")?;
        writeln!(
            self.output,
            "Goal: get as close to 21 as possible without busting."
        )?;
        writeln!(
            self.output,
            "Number cards count face value, J/Q/K count 10, Aces count 1 or 11."
        )?;
        writeln!(self.output, "Reach {target} points to win!")?;
        writeln!(self.output)
    }

    /// Returns `false` if input ended before every seat was filled.
    fn seat_players(&mut self, seating: Seating) -> io::Result<bool> {
        let count = if let Some(count) = seating.players {
            usize::from(count)
        } else {
            write!(self.output, "Enter number of players (1-2): ")?;
            let max = self.game.options().max_players;
            match self.read_number(1, max)? {
                Some(count) => count,
                None => return Ok(false),
            }
        };

        for seat in 1..=count {
            let name = if let Some(name) = seating.names.get(seat - 1) {
                name.clone()
            } else {
                write!(self.output, "Enter name for Player {seat}: ")?;
                match self.read_line()? {
                    Some(name) if !name.is_empty() => name,
                    Some(_) => format!("Player {seat}"),
                    None => return Ok(false),
                }
            };

            if let Err(err) = self.game.join(name) {
                writeln!(self.output, "Cannot seat player {seat}: {err}")?;
            }
        }

        writeln!(
            self.output,
            "\nPlayers ready! Each player starts with {} points.",
            self.game.options().starting_points
        )?;
        Ok(true)
    }

    /// Plays one full round. Returns `false` when play should stop.
    fn play_round(&mut self) -> io::Result<bool> {
        let reshuffled = match self.game.start_round() {
            Ok(reshuffled) => reshuffled,
            Err(err) => {
                error!("cannot start round: {err}");
                return Ok(false);
            }
        };

        writeln!(self.output, "\n==================== ROUND {} ====================", self.game.round())?;
        if reshuffled {
            writeln!(self.output, "Reshuffling deck...")?;
        }

        if !self.betting_phase()? {
            return Ok(false);
        }

        match self.game.deal() {
            Ok(()) => {}
            Err(DealError::NoBets) => return Ok(false),
            Err(err) => {
                writeln!(self.output, "Deal error: {err}")?;
                return Ok(false);
            }
        }
        self.show_deal()?;

        if self.game.state() == GameState::RoundOver {
            writeln!(self.output, "\n*** Dealer has BLACKJACK! ***")?;
            self.show_all_hands()?;
        }

        while self.game.state() == GameState::PlayerTurn {
            if !self.player_turn()? {
                return Ok(false);
            }
        }

        if self.game.state() == GameState::DealerTurn {
            self.dealer_turn()?;
        }

        self.show_results()?;

        if !self.game.is_over() {
            write!(self.output, "\nPress Enter to continue to next round...")?;
            if self.read_line()?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `false` if input ended.
    fn betting_phase(&mut self) -> io::Result<bool> {
        for player_id in 0..self.game.player_count() {
            let Some(player) = self.game.player(player_id) else {
                continue;
            };
            let name = player.name().to_string();
            let points = player.points();

            if points == 0 {
                writeln!(self.output, "{name} has no points left and cannot bet.")?;
                continue;
            }

            writeln!(self.output, "\n{name}'s turn to bet.")?;
            writeln!(self.output, "Current points: {points}")?;

            loop {
                write!(
                    self.output,
                    "Enter bet amount (1-{points}, or 0 to quit): "
                )?;
                let Some(amount) = self.read_number(0, points)? else {
                    return Ok(false);
                };

                let outcome = if amount == 0 {
                    self.game.quit(player_id).map(|()| format!("{name} has chosen to quit."))
                } else {
                    self.game
                        .bet(player_id, amount)
                        .map(|()| format!("{name} bets {amount} points."))
                };

                match outcome {
                    Ok(message) => {
                        writeln!(self.output, "{message}")?;
                        break;
                    }
                    Err(err) => writeln!(self.output, "Bet rejected: {err}")?,
                }
            }
        }
        Ok(true)
    }

    fn show_deal(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Dealing cards ---")?;
        for player in self.game.players().iter().filter(|p| p.has_bet()) {
            writeln!(self.output, "{}: {}", player.name(), player.hand())?;
            if player.hand().is_blackjack() {
                writeln!(self.output, "  ** BLACKJACK! **")?;
            }
        }
        let dealer = self.dealer_view();
        writeln!(self.output, "Dealer: {dealer}")
    }

    fn dealer_view(&self) -> String {
        let dealer = self.game.dealer();
        if dealer.is_hole_revealed() || dealer.hand().len() < 2 {
            return dealer.hand().to_string();
        }
        dealer.up_card().map_or_else(
            || dealer.hand().to_string(),
            |card| format!("[{card}] [??] (Value: ??)"),
        )
    }

    fn show_all_hands(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Hands ---")?;
        for player in self.game.players().iter().filter(|p| p.has_bet()) {
            writeln!(self.output, "{}: {}", player.name(), player.hand())?;
        }
        writeln!(self.output, "Dealer: {}", self.game.dealer().hand())
    }

    /// Returns `false` if input ended.
    fn player_turn(&mut self) -> io::Result<bool> {
        let Some(player_id) = self.game.current_player() else {
            return Ok(true);
        };
        let Some(player) = self.game.player(player_id) else {
            return Ok(true);
        };
        let name = player.name().to_string();

        writeln!(self.output, "\n--- {name}'s Turn ---")?;

        while self.game.current_player() == Some(player_id) {
            let hand = self
                .game
                .player(player_id)
                .map(|p| p.hand().to_string())
                .unwrap_or_default();
            let up_card = self
                .game
                .dealer()
                .up_card()
                .map(ToString::to_string)
                .unwrap_or_default();
            writeln!(self.output, "\nYour hand: {hand}")?;
            writeln!(self.output, "Dealer shows: {up_card}")?;
            writeln!(self.output, "\nChoose action:")?;
            writeln!(self.output, "  1. Hit (draw a card)")?;
            writeln!(self.output, "  2. Stand (keep current hand)")?;
            write!(self.output, "Enter choice (1-2): ")?;

            let Some(choice) = self.read_number(1, 2)? else {
                return Ok(false);
            };

            if choice == 1 {
                match self.game.hit(player_id) {
                    Ok(card) => {
                        writeln!(self.output, "You drew: {card}")?;
                        if let Some(player) = self.game.player(player_id) {
                            let value = player.hand().value();
                            let busted = player.hand().is_bust();
                            writeln!(self.output, "Hand value: {value}")?;
                            if busted {
                                writeln!(self.output, "BUST! Your hand exceeds 21.")?;
                            }
                        }
                    }
                    Err(ActionError::Draw(DrawError::EmptyShoe)) => {
                        if !self.reshuffle_mid_round()? {
                            return Ok(false);
                        }
                    }
                    Err(err) => {
                        writeln!(self.output, "Hit failed: {err}")?;
                        return Ok(false);
                    }
                }
            } else {
                match self.game.stand(player_id) {
                    Ok(()) => {
                        let value = self
                            .game
                            .player(player_id)
                            .map_or(0, |p| p.hand().value());
                        writeln!(self.output, "{name} stands with {value}")?;
                    }
                    Err(err) => {
                        writeln!(self.output, "Stand failed: {err}")?;
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    fn dealer_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Dealer's Turn ---")?;

        let all_busted = self
            .game
            .players()
            .iter()
            .filter(|p| p.has_bet())
            .all(|p| p.hand().is_bust());

        let initial = self.game.dealer().hand().len();
        loop {
            match self.game.dealer_play() {
                Ok(_) => break,
                Err(ShowdownError::Draw(DrawError::EmptyShoe)) => {
                    if !self.reshuffle_mid_round()? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    writeln!(self.output, "Dealer error: {err}")?;
                    return Ok(());
                }
            }
        }

        let cards = self.game.dealer().hand().cards().to_vec();
        writeln!(self.output, "Dealer reveals: {}", Shown(&cards[..initial]))?;

        if all_busted {
            writeln!(self.output, "All players busted. Dealer wins automatically.")?;
            return Ok(());
        }

        for shown in initial + 1..=cards.len() {
            writeln!(self.output, "Dealer draws: {}", cards[shown - 1])?;
            writeln!(self.output, "Dealer's hand: {}", Shown(&cards[..shown]))?;
            self.output.flush()?;
            if !self.dealer_delay.is_zero() {
                thread::sleep(self.dealer_delay);
            }
        }

        let dealer = self.game.dealer().hand();
        if dealer.is_bust() {
            writeln!(self.output, "Dealer BUSTS with {}!", dealer.value())
        } else {
            writeln!(self.output, "Dealer stands with {}", dealer.value())
        }
    }

    /// Rebuilds a shoe that ran dry mid-round. Returns `false` if no cards
    /// could be recovered.
    fn reshuffle_mid_round(&mut self) -> io::Result<bool> {
        if let Err(err) = self.game.reshuffle() {
            writeln!(self.output, "Cannot reshuffle: {err}")?;
            return Ok(false);
        }
        if self.game.cards_remaining() == 0 {
            writeln!(self.output, "No cards left to reshuffle.")?;
            return Ok(false);
        }
        writeln!(self.output, "Shoe is empty. Reshuffling the cards not in play...")?;
        Ok(true)
    }

    fn show_results(&mut self) -> io::Result<()> {
        let result = match self.game.settle() {
            Ok(result) => result,
            Err(err) => return writeln!(self.output, "Settlement error: {err}"),
        };
        info!("round {} settled", result.round);

        writeln!(self.output, "\n--- Round Results ---")?;
        for player in &result.players {
            writeln!(
                self.output,
                "{}: {} ({:+} points)",
                player.name, player.resolution, player.resolution.delta
            )?;
        }

        writeln!(self.output, "\n--- Points Summary ---")?;
        for player in self.game.players() {
            writeln!(self.output, "{}: {} points", player.name(), player.points())?;
        }
        Ok(())
    }

    fn print_summary(&mut self, summary: &GameSummary) -> io::Result<()> {
        writeln!(self.output, "\n==================== GAME OVER ====================")?;
        writeln!(self.output, "Total Rounds Played: {}", summary.rounds)?;
        writeln!(self.output, "\nFinal Standings:")?;
        for standing in &summary.standings {
            let status = match standing.status {
                StandingStatus::Winner => " ** WINNER!",
                StandingStatus::Eliminated => " (Eliminated)",
                StandingStatus::Active => "",
            };
            writeln!(
                self.output,
                "  {}: {} points{status}",
                standing.name, standing.points
            )?;
        }

        let winner = summary
            .winner
            .and_then(|(id, kind)| summary.standings.get(id).map(|s| (s.name.as_str(), kind)));
        match winner {
            Some((name, WinKind::Target)) => {
                writeln!(self.output, "\n*** Congratulations {name}! ***")?;
            }
            Some((name, WinKind::MostPoints)) => {
                writeln!(self.output, "\n{name} wins by having the most points!")?;
            }
            None => writeln!(self.output, "\nNo winner - all players eliminated.")?,
        }
        writeln!(self.output, "\nThank you for playing!")
    }
}

/// A run of the dealer's cards shown with its running total.
struct Shown<'a>(&'a [Card]);

impl ValuedHand for Shown<'_> {
    fn cards(&self) -> &[Card] {
        self.0
    }
}

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.0 {
            write!(f, "[{card}] ")?;
        }
        write!(f, "(Value: {})", self.value())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("starting session with seed {seed}");

    let options = GameOptions::default()
        .with_starting_points(cli.starting_points)
        .with_winning_points(cli.winning_points);
    let seating = Seating {
        players: cli.players,
        names: cli.names,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut table = Table::new(
        Game::new(options, seed),
        stdin.lock(),
        stdout.lock(),
        Duration::from_millis(cli.dealer_delay_ms),
    );

    if let Err(err) = table.run(seating) {
        eprintln!("blackjack: {err}");
        std::process::exit(1);
    }
}
