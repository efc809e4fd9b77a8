use thiserror::Error;

use crate::engine::GameMode;
use crate::poker::Category;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid hand size: {actual} cards (expected {expected})")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Cannot compare {first} with {second} as {expected}")]
    CategoryMismatch {
        expected: Category,
        first: Category,
        second: Category,
    },
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Command {command} is not allowed while {state}")]
    IllegalCommand {
        command: &'static str,
        state: &'static str,
    },
    #[error("{0} is not available yet")]
    ModeUnavailable(GameMode),
}
