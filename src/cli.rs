//! Command-line arguments and the commands typed during play.

use clap::Parser;

use crate::errors::InputError;

/// Hidden Number - guess the secret number before you run out of attempts
#[derive(Parser, Debug)]
#[command(name = "hidden_number")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed the random number source to replay the same secrets
    #[arg(long, conflicts_with = "secret")]
    pub seed: Option<u64>,

    /// Use this secret for every game instead of a random one
    #[arg(long, allow_negative_numbers = true)]
    pub secret: Option<i32>,

    /// Print each guess report as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when RUST_LOG is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "hidden_number=debug"
        } else {
            "warn"
        }
    }
}

/// One line of player input
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    NewGame,
    Quit,
    Guess(i32),
}

impl TryFrom<&str> for Command {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Command, InputError> {
        let value = value.trim();
        match value.to_lowercase().as_str() {
            "new" | "n" => Ok(Command::NewGame),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => value
                .parse::<i32>()
                .map(Command::Guess)
                .map_err(|_| InputError::NotANumber(value.to_string())),
        }
    }
}
