//! # cardsaga-engine: Card Game Rules Engine
//!
//! Rules for the Card Saga table games: a 52-card deck with reproducible
//! shuffles, blackjack scoring with the dealer standing on 17, and five-card
//! poker classification with tie-breaks. Everything is plain data in, plain
//! data out; rendering and input handling belong to the embedding layer.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the canonical deck order
//! - [`deck`] - Shuffled decks driven by an injectable or seeded ChaCha20 RNG
//! - [`hand`] - Ordered cards held by one seat
//! - [`blackjack`] - Scoring, dealer policy and the hit/stand round state machine
//! - [`poker`] - Hand classification, tie-break comparison and dealing
//! - [`engine`] - Game session that owns the decks and dispatches commands
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardsaga_engine::cards::Card;
//! use cardsaga_engine::poker::{classify, Category};
//!
//! let cards: Vec<Card> = ["10S", "JS", "QS", "KS", "AS"]
//!     .iter()
//!     .map(|code| code.parse().unwrap())
//!     .collect();
//!
//! let strength = classify(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use cardsaga_engine::blackjack::BlackjackTable;
//! use cardsaga_engine::deck::Deck;
//!
//! let a = BlackjackTable::deal(Deck::new_with_seed(42)).unwrap();
//! let b = BlackjackTable::deal(Deck::new_with_seed(42)).unwrap();
//! assert_eq!(a.player(), b.player());
//! assert_eq!(a.dealer(), b.dealer());
//! ```

pub mod blackjack;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod poker;
