//! Input parsing and validation for interactive commands.
//!
//! - Blackjack decisions typed at the prompt (hit, stand, quit)
//! - Card codes passed to `classify`

use cardsaga_engine::cards::Card;
use cardsaga_engine::engine::Command;
use cardsaga_engine::poker::HAND_SIZE;
use std::collections::HashSet;

/// Result of parsing one line typed during a blackjack round.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A command for the engine
    Command(Command),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a blackjack decision (case-insensitive).
///
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// # use cardsaga_cli::validation::{parse_blackjack_input, ParseResult};
/// use cardsaga_engine::engine::Command;
///
/// assert_eq!(parse_blackjack_input("HIT"), ParseResult::Command(Command::Hit));
/// assert_eq!(parse_blackjack_input("q"), ParseResult::Quit);
/// ```
pub fn parse_blackjack_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "h" | "hit" => ParseResult::Command(Command::Hit),
        "s" | "stand" => ParseResult::Command(Command::Stand),
        "q" | "quit" => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, q",
            other
        )),
    }
}

/// Parse exactly five distinct card codes.
pub fn parse_cards<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, String> {
    if codes.len() != HAND_SIZE {
        return Err(format!(
            "expected {} cards, got {}",
            HAND_SIZE,
            codes.len()
        ));
    }
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(HAND_SIZE);
    for code in codes {
        let card: Card = code.as_ref().parse().map_err(|e| format!("{}", e))?;
        if !seen.insert(card) {
            return Err(format!("duplicate card {}", code.as_ref()));
        }
        cards.push(card);
    }
    Ok(cards)
}
