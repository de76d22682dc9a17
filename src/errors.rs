use thiserror::Error;

/*
    GAME ERRORS
*/

/// Misuse of the game service by its caller
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum UsageError {
    #[error("No game in progress. Start a new game first")]
    NoGameInProgress,
}

/*
    CONFIGURATION ERRORS
*/
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("The range {low}..={high} contains no numbers")]
    EmptyRange { low: i32, high: i32 },
}

/*
    INPUT ERRORS
*/

/// Raised by the terminal front-end before anything reaches the service
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
}
