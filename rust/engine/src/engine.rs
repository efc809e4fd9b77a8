use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::blackjack::{BlackjackTable, Outcome};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::poker::{self, DealOrder, HandStrength, Verdict};

/// The games offered by a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    Blackjack,
    Poker,
    /// Announced but not playable yet.
    Uno,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Blackjack => "Blackjack",
            GameMode::Poker => "Poker",
            GameMode::Uno => "Uno",
        };
        f.write_str(s)
    }
}

/// Explicit requests issued by the embedding layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Hit,
    Stand,
    Draw,
    Evaluate,
    Assess,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Hit => "hit",
            Command::Stand => "stand",
            Command::Draw => "draw",
            Command::Evaluate => "evaluate",
            Command::Assess => "assess",
        }
    }
}

/// Both poker hands after evaluation. `winner` is `First` for the player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PokerResult {
    pub player: HandStrength,
    pub opponent: HandStrength,
    pub winner: Verdict,
}

/// What a command produced.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Blackjack hit; `outcome` is set when the hit ended the round.
    PlayerHit {
        score: u8,
        outcome: Option<Outcome>,
    },
    Settled(Outcome),
    Dealt { player: Hand, opponent: Hand },
    Evaluated(PokerResult),
    Assessed { result: PokerResult, report: String },
}

/// Poker against the computer: one deck per game, redealt on every draw.
#[derive(Debug, Clone)]
pub struct PokerTable {
    deck: Deck,
    player: Hand,
    opponent: Hand,
    order: DealOrder,
}

impl PokerTable {
    pub fn new(deck: Deck, order: DealOrder) -> Self {
        Self {
            deck,
            player: Hand::new(),
            opponent: Hand::new(),
            order,
        }
    }

    /// Replaces both hands with five fresh cards each.
    pub fn draw(&mut self) -> Result<(), GameError> {
        let (player, opponent) = poker::deal_hands(&mut self.deck, self.order)?;
        self.player = player;
        self.opponent = opponent;
        Ok(())
    }

    pub fn evaluate(&self) -> Result<PokerResult, GameError> {
        if self.player.is_empty() {
            return Err(GameError::IllegalCommand {
                command: Command::Evaluate.as_str(),
                state: "no hands are dealt",
            });
        }
        let player = poker::classify(self.player.cards())?;
        let opponent = poker::classify(self.opponent.cards())?;
        let winner = poker::compare_hands(&player, &opponent).into();
        Ok(PokerResult {
            player,
            opponent,
            winner,
        })
    }

    /// Evaluation plus a readable report of both hands.
    pub fn assess(&self) -> Result<(PokerResult, String), GameError> {
        let result = self.evaluate()?;
        let mut report = String::from("Hand Assessment:\n\n");
        for (title, hand, strength) in [
            ("Your Hand", &self.player, &result.player),
            ("Computer's Hand", &self.opponent, &result.opponent),
        ] {
            report.push_str(&format!("{}: {}\n", title, strength.category));
            report.push_str(&format!("Cards: {}\n", hand));
            report.push_str(&poker::describe(strength));
            report.push_str("\n\n");
        }
        let by_category = result.player.category != result.opponent.category;
        let verdict = match (result.winner, by_category) {
            (Verdict::First, true) => "Your hand is stronger than the computer's hand.",
            (Verdict::Second, true) => "The computer's hand is stronger than your hand.",
            (Verdict::First, false) => "Your hand is stronger due to higher cards.",
            (Verdict::Second, false) => "The computer's hand is stronger due to higher cards.",
            (Verdict::Tie, _) => "Both hands are of equal strength.",
        };
        report.push_str(verdict);
        Ok((result, report))
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn opponent(&self) -> &Hand {
        &self.opponent
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

#[derive(Debug, Clone)]
enum Table {
    Idle,
    Blackjack(BlackjackTable),
    Poker(PokerTable),
}

/// A single player's game session.
///
/// Owns a seeded random source and the table currently in play. Every game
/// started from the session gets its own freshly shuffled deck.
///
/// # Examples
///
/// ```
/// use cardsaga_engine::engine::{Command, Event, GameMode, Session};
///
/// let mut session = Session::new(Some(12345));
/// session.start(GameMode::Poker).unwrap();
/// session.apply(Command::Draw).unwrap();
/// match session.apply(Command::Evaluate) {
///     Ok(Event::Evaluated(result)) => println!("winner: {:?}", result.winner),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub struct Session {
    /// Seed the random source was created from
    seed: u64,
    /// Source of every deck shuffle in this session
    rng: ChaCha20Rng,
    /// Poker dealing order
    order: DealOrder,
    /// The game in progress
    table: Table,
}

impl Session {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            order: DealOrder::default(),
            table: Table::Idle,
        }
    }

    pub fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.order = order;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deal_order(&self) -> DealOrder {
        self.order
    }

    /// Starts a new game of `mode`, discarding whatever was on the table.
    pub fn start(&mut self, mode: GameMode) -> Result<(), GameError> {
        self.table = match mode {
            GameMode::Blackjack => {
                Table::Blackjack(BlackjackTable::deal(Deck::new_shuffled(&mut self.rng))?)
            }
            GameMode::Poker => {
                Table::Poker(PokerTable::new(Deck::new_shuffled(&mut self.rng), self.order))
            }
            GameMode::Uno => return Err(GameError::ModeUnavailable(mode)),
        };
        tracing::debug!(%mode, seed = self.seed, "game started");
        Ok(())
    }

    pub fn mode(&self) -> Option<GameMode> {
        match self.table {
            Table::Idle => None,
            Table::Blackjack(_) => Some(GameMode::Blackjack),
            Table::Poker(_) => Some(GameMode::Poker),
        }
    }

    pub fn blackjack(&self) -> Option<&BlackjackTable> {
        match &self.table {
            Table::Blackjack(t) => Some(t),
            _ => None,
        }
    }

    pub fn poker(&self) -> Option<&PokerTable> {
        match &self.table {
            Table::Poker(t) => Some(t),
            _ => None,
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Event, GameError> {
        tracing::debug!(command = command.as_str(), "apply");
        match (&mut self.table, command) {
            (Table::Blackjack(t), Command::Hit) => {
                t.hit()?;
                Ok(Event::PlayerHit {
                    score: t.player_score(),
                    outcome: t.outcome(),
                })
            }
            (Table::Blackjack(t), Command::Stand) => Ok(Event::Settled(t.stand()?)),
            (Table::Poker(t), Command::Draw) => {
                t.draw()?;
                Ok(Event::Dealt {
                    player: t.player().clone(),
                    opponent: t.opponent().clone(),
                })
            }
            (Table::Poker(t), Command::Evaluate) => Ok(Event::Evaluated(t.evaluate()?)),
            (Table::Poker(t), Command::Assess) => {
                let (result, report) = t.assess()?;
                Ok(Event::Assessed { result, report })
            }
            (Table::Idle, _) => Err(GameError::IllegalCommand {
                command: command.as_str(),
                state: "no game is in progress",
            }),
            (Table::Blackjack(_), _) => Err(GameError::IllegalCommand {
                command: command.as_str(),
                state: "playing blackjack",
            }),
            (Table::Poker(_), _) => Err(GameError::IllegalCommand {
                command: command.as_str(),
                state: "playing poker",
            }),
        }
    }
}
