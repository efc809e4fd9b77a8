//! Interactive blackjack round against the dealer.
//!
//! The player's decisions are read line by line from the supplied reader so
//! the whole round can be driven from a script or a test.

use crate::error::CliError;
use crate::formatters::{format_hand, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_blackjack_input, ParseResult};
use cardsaga_engine::blackjack::{BlackjackTable, Phase};
use cardsaga_engine::engine::{Event, GameMode, Session};
use std::io::{BufRead, Write};

/// Handle the blackjack command.
///
/// Deals one round, then prompts for `hit` or `stand` until the round is
/// settled. `quit` or end of input abandons the round without a result.
pub fn handle_blackjack_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut session = Session::new(seed);
    session.start(GameMode::Blackjack)?;
    writeln!(out, "blackjack: seed={}", session.seed())?;

    loop {
        let table = table(&session)?;
        if table.phase() == Phase::Settled {
            break;
        }
        show_table(out, table, false)?;
        ui::prompt(out, "Hit or stand? (h/s/q)")?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            ui::display_warning(err, "input closed, round abandoned")?;
            return Ok(());
        };
        match parse_blackjack_input(&line) {
            ParseResult::Command(cmd) => match session.apply(cmd)? {
                Event::PlayerHit { score, .. } => writeln!(out, "You drew to {}", score)?,
                Event::Settled(_) => {}
                other => {
                    return Err(CliError::InvalidInput(format!(
                        "unexpected event {:?}",
                        other
                    )));
                }
            },
            ParseResult::Quit => {
                writeln!(out, "Round abandoned.")?;
                return Ok(());
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let table = table(&session)?;
    show_table(out, table, true)?;
    if let Some(outcome) = table.outcome() {
        writeln!(
            out,
            "{}",
            format_outcome(outcome, table.player_score(), table.dealer_score())
        )?;
    }
    Ok(())
}

fn table(session: &Session) -> Result<&BlackjackTable, CliError> {
    session
        .blackjack()
        .ok_or_else(|| CliError::InvalidInput("no blackjack round in progress".into()))
}

// The dealer's second card stays face down until the round is settled.
fn show_table(out: &mut dyn Write, table: &BlackjackTable, reveal: bool) -> Result<(), CliError> {
    if reveal {
        writeln!(
            out,
            "Dealer: {} ({})",
            format_hand(table.dealer()),
            table.dealer_score()
        )?;
    } else {
        let up = table
            .dealer()
            .cards()
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();
        writeln!(out, "Dealer: [{} ??]", up)?;
    }
    writeln!(
        out,
        "You:    {} ({})",
        format_hand(table.player()),
        table.player_score()
    )?;
    Ok(())
}
