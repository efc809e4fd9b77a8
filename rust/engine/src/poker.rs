use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand categories, weakest first. The derived ordering is the ranking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pairs",
            Category::ThreeOfAKind => "Three of A Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of A Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a five-card hand, kept for tie-breaking.
///
/// All ranks are ace-high (2..=14) except the wheel straight, whose sequence
/// is written `[5, 4, 3, 2, 1]`. Unused slots are zero.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Category-defining ranks, most significant first: the paired rank,
    /// both pair ranks, trips then pair, or the top card of a sequence.
    pub primary: [u8; 2],
    /// Remaining ranks high -> low. Straights, flushes and high-card hands
    /// carry all five ranks here.
    pub kickers: [u8; 5],
}

impl HandStrength {
    fn new(category: Category, primary: &[u8], kickers: &[u8]) -> Self {
        Self {
            category,
            primary: pad(primary),
            kickers: pad(kickers),
        }
    }

    /// Ranks compared, in order, when two hands share a category.
    fn tiebreak(&self) -> Vec<u8> {
        match self.category {
            Category::Pair => {
                let mut v = vec![self.primary[0]];
                v.extend_from_slice(&self.kickers[..3]);
                v
            }
            Category::TwoPair => vec![self.primary[0], self.primary[1], self.kickers[0]],
            Category::ThreeOfAKind | Category::FourOfAKind => vec![self.primary[0]],
            Category::FullHouse => self.primary.to_vec(),
            Category::HighCard
            | Category::Straight
            | Category::Flush
            | Category::StraightFlush
            | Category::RoyalFlush => self.kickers.to_vec(),
        }
    }
}

/// Result of comparing a first hand against a second.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    First,
    Second,
    Tie,
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::First,
            Ordering::Less => Verdict::Second,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Order in which the ten poker cards leave the deck.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealOrder {
    /// Five cards to the player, then five to the opponent.
    #[default]
    Block,
    /// One card to each hand in turn, player first.
    Alternating,
}

impl DealOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            DealOrder::Block => "block",
            DealOrder::Alternating => "alternating",
        }
    }
}

impl FromStr for DealOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(DealOrder::Block),
            "alternating" | "alternate" => Ok(DealOrder::Alternating),
            other => Err(format!("unknown deal order {:?}", other)),
        }
    }
}

/// Deals two five-card hands. Nothing is drawn when fewer than ten cards remain.
pub fn deal_hands(deck: &mut Deck, order: DealOrder) -> Result<(Hand, Hand), GameError> {
    let cards = deck.draw_n(2 * HAND_SIZE)?;
    let (player, opponent): (Vec<Card>, Vec<Card>) = match order {
        DealOrder::Block => {
            let (a, b) = cards.split_at(HAND_SIZE);
            (a.to_vec(), b.to_vec())
        }
        DealOrder::Alternating => (
            cards.iter().step_by(2).copied().collect(),
            cards.iter().skip(1).step_by(2).copied().collect(),
        ),
    };
    tracing::debug!(order = order.as_str(), remaining = deck.remaining(), "dealt poker hands");
    Ok((Hand::from(player), Hand::from(opponent)))
}

/// Classifies exactly five cards.
///
/// # Examples
///
/// ```
/// use cardsaga_engine::cards::Card;
/// use cardsaga_engine::poker::{classify, Category};
///
/// let cards: Vec<Card> = ["2H", "3H", "4H", "5H", "AH"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let strength = classify(&cards).unwrap();
/// assert_eq!(strength.category, Category::StraightFlush);
/// assert_eq!(strength.primary[0], 5);
/// ```
pub fn classify(cards: &[Card]) -> Result<HandStrength, GameError> {
    let cards: &[Card; HAND_SIZE] = cards.try_into().map_err(|_| GameError::InvalidHandSize {
        expected: HAND_SIZE,
        actual: cards.len(),
    })?;

    let mut ascending = [0u8; HAND_SIZE];
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    for (slot, c) in ascending.iter_mut().zip(cards.iter()) {
        let r = c.rank.ace_high();
        *slot = r;
        rank_counts[r as usize] += 1;
    }
    ascending.sort_unstable();
    let mut descending = ascending;
    descending.reverse();

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_top = straight_high(&ascending);

    let strength = if let (true, Some(top)) = (flush, straight_top) {
        if ascending == [10, 11, 12, 13, 14] {
            HandStrength::new(Category::RoyalFlush, &[top], &descending)
        } else {
            HandStrength::new(Category::StraightFlush, &[top], &sequence_from(top))
        }
    } else {
        let groups = group_ranks(&rank_counts);
        if let Some(q) = groups.quad {
            HandStrength::new(Category::FourOfAKind, &[q], &groups.singles)
        } else if let (Some(t), [p]) = (groups.trips, groups.pairs.as_slice()) {
            HandStrength::new(Category::FullHouse, &[t, *p], &[])
        } else if flush {
            HandStrength::new(Category::Flush, &descending[..1], &descending)
        } else if let Some(top) = straight_top {
            HandStrength::new(Category::Straight, &[top], &sequence_from(top))
        } else if let Some(t) = groups.trips {
            HandStrength::new(Category::ThreeOfAKind, &[t], &groups.singles)
        } else if groups.pairs.len() == 2 {
            HandStrength::new(Category::TwoPair, &groups.pairs, &groups.singles)
        } else if groups.pairs.len() == 1 {
            HandStrength::new(Category::Pair, &groups.pairs, &groups.singles)
        } else {
            HandStrength::new(Category::HighCard, &descending[..1], &descending)
        }
    };
    tracing::debug!(category = %strength.category, primary = ?strength.primary, "classified hand");
    Ok(strength)
}

/// Breaks a tie between two hands already classified as `category`.
pub fn compare(
    category: Category,
    a: &HandStrength,
    b: &HandStrength,
) -> Result<Verdict, GameError> {
    if a.category != category || b.category != category {
        return Err(GameError::CategoryMismatch {
            expected: category,
            first: a.category,
            second: b.category,
        });
    }
    Ok(a.tiebreak().cmp(&b.tiebreak()).into())
}

/// Full ordering: category first, then the same-category tie-break.
pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreak().cmp(&b.tiebreak()),
        ord => ord,
    }
}

/// One-line explanation of a classified hand.
pub fn describe(s: &HandStrength) -> String {
    let name = |r: u8| Rank::from_u8(r).map(Rank::name).unwrap_or("?");
    let plural = |r: u8| Rank::from_u8(r).map(Rank::plural).unwrap_or("?");
    let [p0, p1] = s.primary;
    match s.category {
        Category::RoyalFlush => {
            "The highest possible hand: Ten, Jack, Queen, King, and Ace all of the same suit."
                .to_string()
        }
        Category::StraightFlush => format!(
            "Five cards in sequence, all of the same suit. High card: {}",
            name(p0)
        ),
        Category::FourOfAKind => format!("Four {}", plural(p0)),
        Category::FullHouse => format!("Three {} and two {}", plural(p0), plural(p1)),
        Category::Flush => format!(
            "Five cards of the same suit, not in sequence. High card: {}",
            name(p0)
        ),
        Category::Straight => format!(
            "Five cards in sequence, not of the same suit. High card: {}",
            name(p0)
        ),
        Category::ThreeOfAKind => format!("Three {}", plural(p0)),
        Category::TwoPair => format!(
            "A pair of {} and a pair of {}",
            plural(p0),
            plural(p1)
        ),
        Category::Pair => format!("A pair of {}", plural(p0)),
        Category::HighCard => format!("No matching cards. High card: {}", name(p0)),
    }
}

struct RankGroups {
    quad: Option<u8>,
    trips: Option<u8>,
    // high -> low
    pairs: Vec<u8>,
    singles: Vec<u8>,
}

fn group_ranks(rank_counts: &[u8; 15]) -> RankGroups {
    let mut groups = RankGroups {
        quad: None,
        trips: None,
        pairs: vec![],
        singles: vec![],
    };
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            4 => groups.quad = Some(r),
            3 => groups.trips = Some(r),
            2 => groups.pairs.push(r),
            1 => groups.singles.push(r),
            _ => {}
        }
    }
    groups
}

/// Top card of a straight over ascending ace-high ranks, 5 for the wheel.
fn straight_high(ascending: &[u8; HAND_SIZE]) -> Option<u8> {
    if *ascending == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    if ascending.windows(2).all(|w| w[1] == w[0] + 1) {
        Some(ascending[HAND_SIZE - 1])
    } else {
        None
    }
}

fn sequence_from(top: u8) -> [u8; HAND_SIZE] {
    [top, top - 1, top - 2, top - 3, top - 4]
}

fn pad<const N: usize>(ranks: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    for (slot, r) in out.iter_mut().zip(ranks) {
        *slot = *r;
    }
    out
}
