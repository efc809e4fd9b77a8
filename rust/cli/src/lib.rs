//! # Card Saga CLI Library
//!
//! Command-line front end for the Card Saga engine: blackjack against a
//! dealer and five-card poker against the computer.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardsaga", "poker", "--rounds", "3", "--seed", "7"];
//! let code = cardsaga_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `blackjack`: Play one interactive round against the dealer
//! - `poker`: Draw and assess hands against the computer
//! - `classify`: Classify five cards given as codes
//! - `deal`: Deal two poker hands for inspection
//! - `cfg`: Display current configuration settings
//! - `rng`: Inspect the seeded random source

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{CardsagaCli, Commands};
use commands::{
    handle_blackjack_command, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_poker_command, handle_rng_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["blackjack", "poker", "classify", "deal", "cfg", "rng"];

/// Main entry point for the CLI application.
///
/// Interactive commands read from the process's standard input.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardsaga", "deal", "--seed", "42"];
/// let code = cardsaga_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], with player input taken from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardsagaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Card Saga CLI");
            write_or_exit!(err, "Usage: cardsaga <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: cardsaga --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        // cfg reports its own configuration errors
        Commands::Cfg => {
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            };
        }
        Commands::Classify { cards } => handle_classify_command(&cards, out),
        Commands::Rng { seed } => {
            load_config().and_then(|cfg| handle_rng_command(seed.or(cfg.seed), out))
        }
        Commands::Deal { seed } => load_config()
            .and_then(|cfg| handle_deal_command(seed.or(cfg.seed), cfg.deal_order, out)),
        Commands::Blackjack { seed } => load_config()
            .and_then(|cfg| handle_blackjack_command(seed.or(cfg.seed), out, err, stdin)),
        Commands::Poker {
            seed,
            rounds,
            order,
            json,
        } => load_config().and_then(|cfg| {
            handle_poker_command(
                seed.or(cfg.seed),
                rounds.unwrap_or(cfg.rounds),
                order.map(Into::into).unwrap_or(cfg.deal_order),
                json,
                out,
            )
        }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

// Command-line flags take precedence over everything loaded here.
fn load_config() -> Result<config::Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}
