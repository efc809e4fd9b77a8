//! Command handler modules for the Card Saga CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by the caller
//! - Errors propagated via the `CliError` enum

mod blackjack;
mod cfg;
mod classify;
mod deal;
mod poker;
mod rng;

pub use blackjack::handle_blackjack_command;
pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use poker::handle_poker_command;
pub use rng::handle_rng_command;
