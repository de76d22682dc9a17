//! Hidden Number
//!
//! A number guessing game. [`game::Game`] holds the rules of a single round,
//! [`service::GameService`] keeps track of the round being played and draws
//! secrets from a [`number_source::NumberSource`].
//!
//! ```
//! use hidden_number::{
//!     models::{GameStatus, GuessOutcome},
//!     number_source::FixedNumberSource,
//!     service::GameService,
//! };
//!
//! let mut service = GameService::new(FixedNumberSource::new(50));
//! service.new_game();
//!
//! let report = service.guess(30).unwrap();
//! assert_eq!(report.outcome, GuessOutcome::TooLow);
//! assert_eq!(report.status, GameStatus::InProgress);
//! ```

pub mod cli;
pub mod errors;
pub mod game;
pub mod models;
pub mod number_source;
pub mod service;
pub mod terminal;
