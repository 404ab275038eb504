//! Dialog templates shown when a game ends.

use tactoe_engine::Outcome;

/// Title, message and acknowledgement button for one terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertItem {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
    /// Label of the button that starts a new game.
    pub button: &'static str,
}

/// Shown when the human wins.
pub const HUMAN_WIN: AlertItem = AlertItem {
    title: "You Win!",
    message: "Damn son, you beat AI!",
    button: "Hell Yeah!",
};

/// Shown when the computer wins.
pub const COMPUTER_WIN: AlertItem = AlertItem {
    title: "You Lost!",
    message: "Damn son, you messed up!",
    button: "Well this sucks!",
};

/// Shown on a draw.
pub const DRAW: AlertItem = AlertItem {
    title: "DRAW!",
    message: "You both lost!",
    button: "Give it another try",
};

/// Template for a terminal outcome, `None` while the game is in progress.
pub fn alert_for(outcome: Outcome) -> Option<AlertItem> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::HumanWin => Some(HUMAN_WIN),
        Outcome::ComputerWin => Some(COMPUTER_WIN),
        Outcome::Draw => Some(DRAW),
    }
}
