//! Round resolution: maps final hands and a bet to an outcome and a point delta.
//!
//! Resolution is a pure function. The rules are checked in a fixed order and
//! the first match decides:
//!
//! 1. player bust: lose the bet (even if the dealer busts too)
//! 2. dealer blackjack, player without: lose the bet
//! 3. player blackjack, dealer without: win 3:2, rounded down
//! 4. dealer bust: win the bet
//! 5. higher total: win the bet
//! 6. lower total: lose the bet
//! 7. equal totals: push
//!
//! # Example
//!
//! ```
//! use blackjack_table::{HandSnapshot, Outcome, resolve};
//!
//! let player = HandSnapshot::new(20, false, false);
//! let dealer = HandSnapshot::new(18, false, false);
//! let resolution = resolve(player, 50, dealer).unwrap();
//! assert_eq!(resolution.outcome, Outcome::Win);
//! assert_eq!(resolution.delta, 50);
//! ```

use core::fmt;

use crate::error::PointsError;
use crate::hand::ValuedHand;
use crate::player::MAX_POINTS;

/// Read-only view of a final hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSnapshot {
    /// Hand value.
    pub value: u8,
    /// Whether the hand is bust.
    pub busted: bool,
    /// Whether the hand is a natural.
    pub blackjack: bool,
}

impl HandSnapshot {
    /// Creates a snapshot from raw values.
    #[must_use]
    pub const fn new(value: u8, busted: bool, blackjack: bool) -> Self {
        Self {
            value,
            busted,
            blackjack,
        }
    }

    /// Captures the state of a hand.
    #[must_use]
    pub fn of(hand: &impl ValuedHand) -> Self {
        Self {
            value: hand.value(),
            busted: hand.is_bust(),
            blackjack: hand.is_blackjack(),
        }
    }
}

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Tie, no points change hands.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Push => "PUSH",
        })
    }
}

/// The rule that decided an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeReason {
    /// Player went over 21.
    PlayerBust,
    /// Dealer has a natural and the player does not.
    DealerBlackjack,
    /// Player has a natural and the dealer does not.
    Blackjack,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beats the dealer's.
    HigherTotal,
    /// Dealer total beats the player's.
    LowerTotal,
    /// Totals are equal.
    Tie,
}

impl OutcomeReason {
    /// Returns the outcome this rule produces.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::PlayerBust | Self::DealerBlackjack | Self::LowerTotal => Outcome::Lose,
            Self::Blackjack | Self::DealerBust | Self::HigherTotal => Outcome::Win,
            Self::Tie => Outcome::Push,
        }
    }
}

/// Outcome of one bettor's hand together with the signed change to their balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Win, lose, or push.
    pub outcome: Outcome,
    /// The rule that decided the outcome.
    pub reason: OutcomeReason,
    /// Signed point change (negative on a loss).
    pub delta: isize,
}

/// Labels such as `WIN (Blackjack!)`, `LOSE (Busted)`, or `PUSH (Tie)`.
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            OutcomeReason::PlayerBust => f.write_str("LOSE (Busted)"),
            OutcomeReason::DealerBlackjack => f.write_str("LOSE (Dealer Blackjack)"),
            OutcomeReason::Blackjack => f.write_str("WIN (Blackjack!)"),
            OutcomeReason::DealerBust => f.write_str("WIN (Dealer Busted)"),
            OutcomeReason::Tie => f.write_str("PUSH (Tie)"),
            OutcomeReason::HigherTotal | OutcomeReason::LowerTotal => {
                fmt::Display::fmt(&self.outcome, f)
            }
        }
    }
}

fn signed(amount: usize) -> Result<isize, PointsError> {
    isize::try_from(amount).map_err(|_| PointsError::LimitExceeded { max: MAX_POINTS })
}

/// Returns the 3:2 blackjack winnings for `bet`, truncated toward zero.
///
/// Returns `None` if the winnings overflow `usize`.
#[must_use]
pub const fn blackjack_payout(bet: usize) -> Option<usize> {
    bet.checked_add(bet / 2)
}

/// Decides one bettor's hand against the dealer's.
///
/// # Errors
///
/// Returns [`PointsError::LimitExceeded`] if `bet` is above [`MAX_POINTS`].
pub fn resolve(
    player: HandSnapshot,
    bet: usize,
    dealer: HandSnapshot,
) -> Result<Resolution, PointsError> {
    if bet > MAX_POINTS {
        return Err(PointsError::LimitExceeded { max: MAX_POINTS });
    }

    let reason = if player.busted {
        OutcomeReason::PlayerBust
    } else if dealer.blackjack && !player.blackjack {
        OutcomeReason::DealerBlackjack
    } else if player.blackjack && !dealer.blackjack {
        OutcomeReason::Blackjack
    } else if dealer.busted {
        OutcomeReason::DealerBust
    } else if player.value > dealer.value {
        OutcomeReason::HigherTotal
    } else if player.value < dealer.value {
        OutcomeReason::LowerTotal
    } else {
        OutcomeReason::Tie
    };

    let delta = match reason {
        OutcomeReason::Blackjack => {
            let payout =
                blackjack_payout(bet).ok_or(PointsError::LimitExceeded { max: MAX_POINTS })?;
            signed(payout)?
        }
        OutcomeReason::DealerBust | OutcomeReason::HigherTotal => signed(bet)?,
        OutcomeReason::PlayerBust | OutcomeReason::DealerBlackjack | OutcomeReason::LowerTotal => {
            -signed(bet)?
        }
        OutcomeReason::Tie => 0,
    };

    Ok(Resolution {
        outcome: reason.outcome(),
        reason,
        delta,
    })
}
