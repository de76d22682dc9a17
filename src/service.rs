use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::{
    errors::UsageError,
    game::Game,
    models::{GameStatus, GuessReport},
    number_source::NumberSource,
};

/// Owns the round being played and every state it went through
#[derive(Debug)]
pub struct GameService<S: NumberSource> {
    source: S,
    current_game: Option<Game>,
    history: Vec<Game>,
}

impl<S: NumberSource> GameService<S> {
    pub fn new(source: S) -> Self {
        GameService {
            source,
            current_game: None,
            history: Vec::new(),
        }
    }

    /// Start a new round with a secret drawn from the number source.
    /// Whatever round was in progress is dropped.
    pub fn new_game(&mut self) -> &Game {
        let game = Game::new(self.source.generate());
        debug!(range = ?self.source.range(), "new game started");

        self.history.push(game.clone());
        self.current_game.insert(game)
    }

    /// Submit a guess to the current round
    /// ### Parameters
    /// `guessed_number`: The number the player picked
    /// ### Returns
    /// A `GuessReport` describing the new state of the round
    /// ### Errors
    /// `UsageError::NoGameInProgress` if `new_game` was never called. Nothing is
    /// recorded in that case.
    pub fn guess(&mut self, guessed_number: i32) -> Result<GuessReport, UsageError> {
        let Some(current) = self.current_game.as_ref() else {
            warn!(guessed_number, "guess submitted with no game in progress");
            return Err(UsageError::NoGameInProgress);
        };

        let (next, outcome) = current.advance(guessed_number);
        let report = GuessReport {
            outcome,
            status: next.status(),
            attempt: next.attempt(),
            attempts_left: next.attempts_left(),
        };
        debug!(
            guessed_number,
            attempt = report.attempt,
            outcome = %report.outcome,
            status = %report.status,
            "guess evaluated"
        );

        self.history.push(next.clone());
        self.current_game = Some(next);
        Ok(report)
    }

    pub fn current_game(&self) -> Option<&Game> {
        self.current_game.as_ref()
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.current_game.as_ref().map(Game::status)
    }

    /// Every game state produced so far, oldest first
    pub fn history(&self) -> &[Game] {
        &self.history
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// A `GameService` that can be handed to several threads.
///
/// Each operation holds the lock for its whole read-then-replace.
#[derive(Debug)]
pub struct SharedGameService<S: NumberSource> {
    inner: Arc<Mutex<GameService<S>>>,
}

impl<S: NumberSource> Clone for SharedGameService<S> {
    fn clone(&self) -> Self {
        SharedGameService {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NumberSource> SharedGameService<S> {
    pub fn new(service: GameService<S>) -> Self {
        SharedGameService {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    // Operations replace state only after they succeed, so a poisoned lock
    // still guards a consistent service.
    fn lock(&self) -> MutexGuard<'_, GameService<S>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn new_game(&self) -> Game {
        self.lock().new_game().clone()
    }

    pub fn guess(&self, guessed_number: i32) -> Result<GuessReport, UsageError> {
        self.lock().guess(guessed_number)
    }

    pub fn current_game(&self) -> Option<Game> {
        self.lock().current_game().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history().len()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{game::MAX_ATTEMPTS, models::GuessOutcome, number_source::FixedNumberSource};

    fn setup() -> GameService<FixedNumberSource> {
        GameService::new(FixedNumberSource::new(50))
    }

    #[test]
    fn test_guess_without_game() {
        let mut service = setup();
        let result = service.guess(50);

        assert_eq!(result, Err(UsageError::NoGameInProgress));
        assert!(service.current_game().is_none());
        assert!(service.history().is_empty());
        assert_eq!(service.status(), None);
    }

    #[test]
    fn test_new_game() {
        let mut service = setup();
        let game = service.new_game().clone();

        assert_eq!(game.attempt(), 0);
        assert_eq!(game.last_outcome(), None);
        assert_eq!(service.current_game(), Some(&game));
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.status(), Some(GameStatus::InProgress));
    }

    #[test]
    fn test_scenario_win() {
        let mut service = setup();
        service.new_game();

        let report = service.guess(30).unwrap();
        assert_eq!(report.outcome, GuessOutcome::TooLow);
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.attempt, 1);

        let report = service.guess(70).unwrap();
        assert_eq!(report.outcome, GuessOutcome::TooHigh);
        assert_eq!(report.attempt, 2);

        let report = service.guess(50).unwrap();
        assert_eq!(report.outcome, GuessOutcome::Correct);
        assert_eq!(report.status, GameStatus::Win);
        assert_eq!(report.attempt, 3);
        assert_eq!(report.attempts_left, MAX_ATTEMPTS - 3);

        let current = service.current_game().unwrap();
        assert_eq!(current.attempt(), 3);
        assert_eq!(current.revealed_secret(), Some(50));
        assert_eq!(service.history().len(), 4);
    }

    #[test]
    fn test_scenario_lose() {
        let mut service = setup();
        service.new_game();

        for i in 1..MAX_ATTEMPTS {
            let report = service.guess(49).unwrap();
            assert_eq!(report.attempt, i);
            assert_eq!(report.status, GameStatus::InProgress);
        }

        let report = service.guess(49).unwrap();
        assert_eq!(report.attempt, MAX_ATTEMPTS);
        assert_eq!(report.outcome, GuessOutcome::TooLow);
        assert_eq!(report.status, GameStatus::Lose);
        assert_eq!(report.attempts_left, 0);
    }

    #[test]
    fn test_new_game_resets_round() {
        let mut service = setup();
        service.new_game();
        service.guess(10).unwrap();
        service.guess(90).unwrap();

        let game = service.new_game();
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.last_outcome(), None);

        let report = service.guess(50).unwrap();
        assert_eq!(report.attempt, 1);
        assert_eq!(report.status, GameStatus::Win);
    }

    #[test]
    fn test_returned_game_is_a_snapshot() {
        let mut service = setup();
        let started = service.new_game().clone();
        service.guess(20).unwrap();

        assert_eq!(started.attempt(), 0);
        assert_eq!(started.last_outcome(), None);
        assert_eq!(service.current_game().unwrap().attempt(), 1);
    }

    #[test]
    fn test_history_records_every_state() {
        let mut service = setup();
        service.new_game();
        service.guess(20).unwrap();
        service.guess(60).unwrap();
        service.new_game();
        service.guess(50).unwrap();

        let attempts: Vec<u32> = service.history().iter().map(Game::attempt).collect();
        assert_eq!(attempts, vec![0, 1, 2, 0, 1]);

        let outcomes: Vec<Option<GuessOutcome>> =
            service.history().iter().map(Game::last_outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                None,
                Some(GuessOutcome::TooLow),
                Some(GuessOutcome::TooHigh),
                None,
                Some(GuessOutcome::Correct),
            ]
        );
    }

    #[test]
    fn test_failed_guess_keeps_history() {
        let mut service = setup();
        assert!(service.guess(1).is_err());
        assert!(service.guess(2).is_err());
        service.new_game();
        assert_eq!(service.history().len(), 1);
    }

    #[test]
    fn test_source_is_readable() {
        let service = setup();
        assert_eq!(service.source().range(), 50..=50);
    }

    #[test]
    fn test_shared_service_across_threads() {
        let shared = SharedGameService::new(setup());
        assert_eq!(shared.guess(3), Err(UsageError::NoGameInProgress));
        shared.new_game();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..2 {
                        shared.guess(1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let game = shared.current_game().unwrap();
        assert_eq!(game.attempt(), 8);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(shared.history_len(), 9);
    }
}
