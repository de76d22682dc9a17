use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{GameStatus, GuessOutcome};

/// Number of guesses every round gets before it is lost
pub const MAX_ATTEMPTS: u32 = 10;

/// The full state of one round.
///
/// A `Game` is never modified. Every guess produces a new value, so a
/// game held by a caller keeps describing the moment it was returned.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Game {
    #[serde(skip)]
    secret_number: i32,
    attempt: u32,
    last_outcome: Option<GuessOutcome>,
}

impl Game {
    /// Create a new round around `secret_number`
    pub fn new(secret_number: i32) -> Self {
        Game::with_state(secret_number, 0, None)
    }

    /// Create a round with explicit progress
    /// ### Parameters
    /// `secret_number`: The number to be guessed\
    /// `attempt`: How many guesses were already made\
    /// `last_outcome`: The classification of the latest guess, if any
    pub fn with_state(
        secret_number: i32,
        attempt: u32,
        last_outcome: Option<GuessOutcome>,
    ) -> Self {
        Game {
            secret_number,
            attempt,
            last_outcome,
        }
    }

    fn compare(guessed_number: i32, secret_number: i32) -> GuessOutcome {
        match guessed_number.cmp(&secret_number) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Equal => GuessOutcome::Correct,
            Ordering::Greater => GuessOutcome::TooHigh,
        }
    }

    /// Evaluate a guess and return the next state of the round.
    ///
    /// Any `i32` is accepted; keeping guesses inside the range is left to
    /// whoever collects them. The attempt counter stops at `u32::MAX`.
    pub fn guess(&self, guessed_number: i32) -> Game {
        self.advance(guessed_number).0
    }

    /// Same transition as `guess`, also handing back the outcome it recorded
    pub(crate) fn advance(&self, guessed_number: i32) -> (Game, GuessOutcome) {
        let outcome = Game::compare(guessed_number, self.secret_number);
        let next = Game {
            secret_number: self.secret_number,
            attempt: self.attempt.saturating_add(1),
            last_outcome: Some(outcome),
        };
        (next, outcome)
    }

    pub fn status(&self) -> GameStatus {
        match self.last_outcome {
            Some(GuessOutcome::Correct) => GameStatus::Win,
            _ if self.attempt >= MAX_ATTEMPTS => GameStatus::Lose,
            _ => GameStatus::InProgress,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    pub fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    pub fn attempts_left(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempt)
    }

    /// The secret number, once the round can no longer change its fate
    pub fn revealed_secret(&self) -> Option<i32> {
        self.is_over().then_some(self.secret_number)
    }
}
