use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits of a standard 52-card deck.
/// Suits carry no ordering in any rule; the declaration order is only the
/// canonical construction order of a fresh deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Hearts (♥)
    Hearts,
    /// Diamonds (♦)
    Diamonds,
    /// Clubs (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'S' | '♠' => Some(Suit::Spades),
            'H' | '♥' => Some(Suit::Hearts),
            'D' | '♦' => Some(Suit::Diamonds),
            'C' | '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Face value of a card, Ace through King.
///
/// The discriminant is the natural rank (Ace = 1, King = 13). Game rules pick
/// the contextual value: [`Rank::ace_high`] for poker ordering,
/// [`Rank::blackjack_value`] for blackjack totals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, or 14 when ranked high)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

struct RankInfo {
    name: &'static str,
    plural: &'static str,
    label: &'static str,
}

// Indexed by `Rank as usize - 1`.
const RANK_TABLE: [RankInfo; 13] = [
    RankInfo { name: "Ace", plural: "Aces", label: "A" },
    RankInfo { name: "2", plural: "2s", label: "2" },
    RankInfo { name: "3", plural: "3s", label: "3" },
    RankInfo { name: "4", plural: "4s", label: "4" },
    RankInfo { name: "5", plural: "5s", label: "5" },
    RankInfo { name: "6", plural: "6s", label: "6" },
    RankInfo { name: "7", plural: "7s", label: "7" },
    RankInfo { name: "8", plural: "8s", label: "8" },
    RankInfo { name: "9", plural: "9s", label: "9" },
    RankInfo { name: "10", plural: "10s", label: "10" },
    RankInfo { name: "Jack", plural: "Jacks", label: "J" },
    RankInfo { name: "Queen", plural: "Queens", label: "Q" },
    RankInfo { name: "King", plural: "Kings", label: "K" },
];

impl Rank {
    /// Natural rank 1..=13 to `Rank`. Also accepts 14 as a high Ace so that
    /// poker ranks can be mapped back.
    pub fn from_u8(v: u8) -> Option<Rank> {
        let r = match v {
            1 | 14 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(r)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Poker ordering value: Ace counts 14.
    pub fn ace_high(self) -> u8 {
        match self {
            Rank::Ace => 14,
            r => r as u8,
        }
    }

    /// Blackjack value before soft/hard adjustment: Ace 11, faces 10.
    pub fn blackjack_value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            r => (r as u8).min(10),
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn plural(self) -> &'static str {
        self.info().plural
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    fn info(self) -> &'static RankInfo {
        &RANK_TABLE[self as usize - 1]
    }

    fn from_label(s: &str) -> Option<Rank> {
        let upper = s.to_ascii_uppercase();
        if upper == "T" {
            return Some(Rank::Ten);
        }
        all_ranks().into_iter().find(|r| r.label() == upper)
    }
}

/// A single playing card. Cards are plain values: copied into hands, never mutated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Compact code such as `AS`, `10H`, `KC`.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.letter())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.label())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses `<rank><suit>` codes: `AS`, `10h`, `TD`, `kc`, `Q♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let suit = Suit::from_char(suit_char).ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        let rank = Rank::from_label(rank_part).ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards in canonical order: suits Spades, Hearts, Diamonds, Clubs,
/// each Ace through King.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
