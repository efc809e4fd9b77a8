//! Text rendering of hands and results for terminal display.

use cardsaga_engine::blackjack::Outcome;
use cardsaga_engine::engine::PokerResult;
use cardsaga_engine::hand::Hand;
use cardsaga_engine::poker::Verdict;

/// Format a hand as bracketed card symbols, e.g. `[♠A ♥10]`.
pub fn format_hand(hand: &Hand) -> String {
    format!("[{}]", hand)
}

/// Announcement for a settled blackjack round.
///
/// ```rust
/// use cardsaga_cli::formatters::format_outcome;
/// use cardsaga_engine::blackjack::Outcome;
///
/// assert_eq!(format_outcome(Outcome::Push, 19, 19), "Draw by 19 Score!");
/// ```
pub fn format_outcome(outcome: Outcome, player: u8, dealer: u8) -> String {
    match outcome {
        Outcome::PlayerBust => "Your hand is over 21. Dealer wins!".to_string(),
        Outcome::DealerBust => "Dealer's hand is over 21 Score. You win!".to_string(),
        Outcome::DealerWins => format!("Dealer's hand is {} Score. Dealer wins!", dealer),
        Outcome::PlayerWins => format!("Your hand is {} Score. You win!", player),
        Outcome::Push => format!("Draw by {} Score!", player),
    }
}

/// One-line poker result from the player's point of view.
pub fn format_verdict(result: &PokerResult) -> String {
    let (mine, theirs) = (result.player.category, result.opponent.category);
    match result.winner {
        Verdict::First if mine != theirs => format!("You win with {} vs {}", mine, theirs),
        Verdict::Second if mine != theirs => {
            format!("Computer wins with {} vs {}", theirs, mine)
        }
        Verdict::First => format!("You win with higher {}", mine),
        Verdict::Second => format!("Computer wins with higher {}", theirs),
        Verdict::Tie => format!("Draw! Both have equal {}", mine),
    }
}
