use core::fmt;

use serde::{Deserialize, Serialize};

/// Result of comparing a single guess against the secret number
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    pub fn to_str(&self) -> &str {
        match self {
            GuessOutcome::TooLow => "Too low",
            GuessOutcome::TooHigh => "Too high",
            GuessOutcome::Correct => "Correct",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Overall state of a round. Always derived from a `Game`, never stored
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Win,
    Lose,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Win => write!(f, "win"),
            GameStatus::Lose => write!(f, "lose"),
        }
    }
}

/// What the service hands back after a successful guess\
/// `outcome`: The classification of the guess\
/// `status`: The status of the game after the guess\
/// `attempt`: How many guesses have been made in this round\
/// `attempts_left`: How many guesses remain before the round is lost
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub status: GameStatus,
    pub attempt: u32,
    pub attempts_left: u32,
}
