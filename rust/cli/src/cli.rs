//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use cardsaga_engine::poker::DealOrder;

#[derive(Parser, Debug)]
#[command(name = "cardsaga", version, about = "Card Saga: blackjack and poker at the terminal")]
pub struct CardsagaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one blackjack round against the dealer
    Blackjack {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Draw and assess poker hands against the computer
    Poker {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5))]
        rounds: Option<u32>,
        #[arg(long, value_enum)]
        order: Option<Order>,
        #[arg(long)]
        json: bool,
    },
    /// Classify five cards given as codes (e.g. AS KD 10H 10C 2S)
    Classify {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal two five-card poker hands
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration
    Cfg,
    /// Print a sample from the seeded RNG
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Poker dealing order as accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Order {
    /// Five cards to the player, then five to the computer.
    Block,
    /// One card to each hand in turn.
    Alternating,
}

impl From<Order> for DealOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Block => DealOrder::Block,
            Order::Alternating => DealOrder::Alternating,
        }
    }
}
