//! Poker rounds against the computer.

use crate::error::CliError;
use crate::formatters::{format_hand, format_verdict};
use cardsaga_engine::cards::Card;
use cardsaga_engine::engine::{Command, Event, GameMode, Session};
use cardsaga_engine::poker::DealOrder;
use std::io::Write;

/// Handle the poker command.
///
/// Every round draws two fresh hands from the same deck and assesses them.
/// With `json` set each round is one JSON object per line instead of the
/// readable report.
pub fn handle_poker_command(
    seed: Option<u64>,
    rounds: u32,
    order: DealOrder,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut session = Session::new(seed).with_deal_order(order);
    session.start(GameMode::Poker)?;
    if !json {
        writeln!(
            out,
            "poker: seed={} rounds={} order={}",
            session.seed(),
            rounds,
            order.as_str()
        )?;
    }

    for round in 1..=rounds {
        let Event::Dealt { player, opponent } = session.apply(Command::Draw)? else {
            return Err(CliError::InvalidInput("draw produced no hands".into()));
        };
        let Event::Assessed { result, report } = session.apply(Command::Assess)? else {
            return Err(CliError::InvalidInput("assessment produced no report".into()));
        };

        if json {
            let codes = |cards: &[Card]| cards.iter().map(Card::code).collect::<Vec<_>>();
            let record = serde_json::json!({
                "round": round,
                "seed": session.seed(),
                "player": codes(player.cards()),
                "opponent": codes(opponent.cards()),
                "result": result,
            });
            let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out)?;
            writeln!(out, "Round {}", round)?;
            writeln!(out, "You:      {}", format_hand(&player))?;
            writeln!(out, "Computer: {}", format_hand(&opponent))?;
            writeln!(out)?;
            writeln!(out, "{}", report)?;
            writeln!(out, "{}", format_verdict(&result))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(seed: u64, rounds: u32, order: DealOrder, json: bool) -> String {
        let mut out = Vec::new();
        handle_poker_command(Some(seed), rounds, order, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report_per_round() {
        let out = run(42, 3, DealOrder::Block, false);
        assert!(out.starts_with("poker: seed=42 rounds=3 order=block"));
        assert_eq!(out.matches("Hand Assessment:").count(), 3);
        assert!(out.contains("Round 3"));
        assert!(!out.contains("Round 4"));
    }

    #[test]
    fn json_lines_are_parseable() {
        let out = run(9, 2, DealOrder::Alternating, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        for (i, line) in lines.iter().enumerate() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["round"], i as u64 + 1);
            assert_eq!(v["player"].as_array().unwrap().len(), 5);
            assert_eq!(v["opponent"].as_array().unwrap().len(), 5);
            assert!(v["result"]["winner"].is_string());
        }
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(
            run(1234, 5, DealOrder::Block, true),
            run(1234, 5, DealOrder::Block, true)
        );
    }

    #[test]
    fn deal_order_changes_the_hands() {
        let block: serde_json::Value =
            serde_json::from_str(run(77, 1, DealOrder::Block, true).trim()).unwrap();
        let alt: serde_json::Value =
            serde_json::from_str(run(77, 1, DealOrder::Alternating, true).trim()).unwrap();
        assert_ne!(block["player"], alt["player"]);
    }

    #[test]
    fn too_many_rounds_runs_out_of_cards() {
        let mut out = Vec::new();
        let err = handle_poker_command(Some(1), 6, DealOrder::Block, true, &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(cardsaga_engine::errors::GameError::EmptyDeck)
        ));
    }
}
