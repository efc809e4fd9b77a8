//! Random source inspection.
//!
//! Prints raw values from the ChaCha20 generator for a seed, followed by the
//! top of the deck that seed shuffles. Useful for checking that a seed
//! reproduces the same game.

use crate::error::CliError;
use cardsaga_engine::deck::Deck;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;

    let top: Vec<String> = Deck::new_with_seed(s)
        .peek_remaining()
        .iter()
        .take(5)
        .map(|c| c.to_string())
        .collect();
    writeln!(out, "Top cards: {}", top.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_command_with_explicit_seed() {
        let mut out = Vec::new();
        handle_rng_command(Some(12345), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Seed: 12345"));
        assert!(output.contains("RNG sample"));
        let top = output.lines().last().unwrap();
        assert_eq!(top.trim_start_matches("Top cards: ").split(' ').count(), 5);
    }

    #[test]
    fn rng_command_produces_deterministic_output() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_rng_command(Some(42), &mut out1).unwrap();
        handle_rng_command(Some(42), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce same output");
    }

    #[test]
    fn rng_command_without_seed() {
        let mut out = Vec::new();
        handle_rng_command(None, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("RNG sample"));
    }
}
