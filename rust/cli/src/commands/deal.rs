//! Deal command handler.
//!
//! Deals two five-card poker hands from a freshly shuffled deck without
//! assessing them. A seed makes the deal reproducible.

use crate::error::CliError;
use crate::formatters::format_hand;
use cardsaga_engine::deck::Deck;
use cardsaga_engine::poker::{deal_hands, DealOrder};
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), DealOrder::Block, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    order: DealOrder,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    let (player, computer) = deal_hands(&mut deck, order)?;

    writeln!(out, "Player:   {}", format_hand(&player))?;
    writeln!(out, "Computer: {}", format_hand(&computer))?;
    writeln!(out, "Remaining: {}", deck.remaining())?;
    Ok(())
}
