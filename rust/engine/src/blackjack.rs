use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;
/// The dealer draws while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// Where a blackjack round is. Rounds only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Cards are going out. `BlackjackTable::deal` finishes dealing before it
    /// returns, so a table never reports this phase.
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Dealing => "dealing",
            Phase::PlayerTurn => "player turn",
            Phase::DealerTurn => "dealer turn",
            Phase::Settled => "settled",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    DealerWins,
    PlayerWins,
    Push,
}

impl Outcome {
    /// True when the player takes the round.
    pub fn player_won(self) -> bool {
        matches!(self, Outcome::DealerBust | Outcome::PlayerWins)
    }
}

/// Best total for a hand: Aces count 11 until that would bust, then 1.
///
/// ```
/// use cardsaga_engine::blackjack::score;
/// use cardsaga_engine::cards::Card;
///
/// let hand: Vec<Card> = ["AS", "AD", "9C"].iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(score(&hand), 21);
/// ```
pub fn score(cards: &[Card]) -> u8 {
    let (total, _) = soft_total(cards);
    total
}

/// True when at least one Ace is still counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    let (_, soft_aces) = soft_total(cards);
    soft_aces > 0
}

fn soft_total(cards: &[Card]) -> (u8, u8) {
    let mut total: u32 = 0;
    let mut soft_aces = 0u8;
    for c in cards {
        if c.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += c.rank.blackjack_value() as u32;
    }
    while total > BLACKJACK as u32 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    (total.min(u8::MAX as u32) as u8, soft_aces)
}

/// Final result once both hands are complete.
pub fn settle(player: &[Card], dealer: &[Card]) -> Outcome {
    let p = score(player);
    let d = score(dealer);
    if p > BLACKJACK {
        Outcome::PlayerBust
    } else if d > BLACKJACK {
        Outcome::DealerBust
    } else if p > d {
        Outcome::PlayerWins
    } else if d > p {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Two cards each, alternating player then dealer.
pub fn deal(deck: &mut Deck) -> Result<(Hand, Hand), GameError> {
    let mut player = Hand::new();
    let mut dealer = Hand::new();
    for _ in 0..2 {
        player.push(deck.draw()?);
        dealer.push(deck.draw()?);
    }
    Ok((player, dealer))
}

/// Adds one card to `hand` and returns the new score.
pub fn hit(hand: &mut Hand, deck: &mut Deck) -> Result<u8, GameError> {
    hand.push(deck.draw()?);
    Ok(score(hand.cards()))
}

/// Dealer policy: draw while below 17. Returns the dealer's final score.
pub fn stand(dealer: &mut Hand, deck: &mut Deck) -> Result<u8, GameError> {
    let mut total = score(dealer.cards());
    while total < DEALER_STANDS_ON {
        total = hit(dealer, deck)?;
        tracing::debug!(dealer = total, "dealer draws");
    }
    Ok(total)
}

/// One blackjack round: a deck, the two hands, and the round's phase.
///
/// # Examples
///
/// ```
/// use cardsaga_engine::blackjack::{BlackjackTable, Phase};
/// use cardsaga_engine::deck::Deck;
///
/// let mut table = BlackjackTable::deal(Deck::new_with_seed(9)).unwrap();
/// assert_eq!(table.phase(), Phase::PlayerTurn);
/// let outcome = table.stand().unwrap();
/// assert_eq!(table.outcome(), Some(outcome));
/// ```
#[derive(Debug, Clone)]
pub struct BlackjackTable {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl BlackjackTable {
    pub fn deal(mut deck: Deck) -> Result<Self, GameError> {
        let (player, dealer) = deal(&mut deck)?;
        tracing::debug!(
            player = score(player.cards()),
            dealer_up = %dealer.cards()[0],
            "blackjack dealt"
        );
        Ok(Self {
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
        })
    }

    /// Player draws. Busting settles the round; reaching 21 stands automatically.
    pub fn hit(&mut self) -> Result<Phase, GameError> {
        self.expect_player_turn("hit")?;
        let total = hit(&mut self.player, &mut self.deck)?;
        tracing::debug!(player = total, "player hits");
        if total > BLACKJACK {
            self.phase = Phase::Settled;
        } else if total == BLACKJACK {
            self.play_dealer()?;
        }
        Ok(self.phase)
    }

    pub fn stand(&mut self) -> Result<Outcome, GameError> {
        self.expect_player_turn("stand")?;
        self.play_dealer()
    }

    fn play_dealer(&mut self) -> Result<Outcome, GameError> {
        self.phase = Phase::DealerTurn;
        stand(&mut self.dealer, &mut self.deck)?;
        self.phase = Phase::Settled;
        let outcome = settle(self.player.cards(), self.dealer.cards());
        tracing::debug!(?outcome, "blackjack settled");
        Ok(outcome)
    }

    fn expect_player_turn(&self, command: &'static str) -> Result<(), GameError> {
        if self.phase == Phase::PlayerTurn {
            Ok(())
        } else {
            Err(GameError::IllegalCommand {
                command,
                state: self.phase.as_str(),
            })
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_score(&self) -> u8 {
        score(self.player.cards())
    }

    pub fn dealer_score(&self) -> u8 {
        score(self.dealer.cards())
    }

    /// `Some` once the round is settled.
    pub fn outcome(&self) -> Option<Outcome> {
        (self.phase == Phase::Settled).then(|| settle(self.player.cards(), self.dealer.cards()))
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
