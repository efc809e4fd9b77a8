//! Classify a five-card hand given on the command line.

use crate::error::CliError;
use crate::validation::parse_cards;
use cardsaga_engine::hand::Hand;
use cardsaga_engine::poker::{classify, describe};
use std::io::Write;

/// Handle the classify command.
///
/// `codes` are card codes such as `AS`, `10H` or `TD`; exactly five distinct
/// cards are required.
pub fn handle_classify_command(codes: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(codes).map_err(CliError::InvalidInput)?;
    let strength = classify(&cards)?;
    writeln!(out, "Cards: {}", Hand::from(cards))?;
    writeln!(out, "Category: {}", strength.category)?;
    writeln!(out, "{}", describe(&strength))?;
    Ok(())
}
