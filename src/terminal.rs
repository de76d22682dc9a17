//! Plain text front-end: reads commands line by line and prints the results.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{
    cli::Command,
    errors::UsageError,
    game::Game,
    models::{GameStatus, GuessReport},
    number_source::NumberSource,
    service::GameService,
};

fn print_intro<S: NumberSource, W: Write>(
    service: &GameService<S>,
    output: &mut W,
) -> io::Result<()> {
    let range = service.source().range();
    writeln!(
        output,
        "Guess the number between {} and {}. Type `new` for a new game or `quit` to leave.",
        range.start(),
        range.end()
    )
}

fn print_report<W: Write>(
    report: &GuessReport,
    game: Option<&Game>,
    output: &mut W,
) -> io::Result<()> {
    match report.status {
        GameStatus::InProgress => writeln!(
            output,
            "{}! ({} attempts left)",
            report.outcome, report.attempts_left
        ),
        GameStatus::Win => writeln!(
            output,
            "Correct! You found it in {} attempts. Type `new` to play again.",
            report.attempt
        ),
        GameStatus::Lose => {
            let secret = game.and_then(Game::revealed_secret);
            match secret {
                Some(secret) => writeln!(
                    output,
                    "{}! Out of attempts, the number was {}. Type `new` to play again.",
                    report.outcome, secret
                ),
                None => writeln!(output, "{}! Out of attempts.", report.outcome),
            }
        }
    }
}

/// Play until `quit` or the end of `input`.
///
/// A game is started before the first line is read.
pub fn run<S, R, W>(
    service: &mut GameService<S>,
    input: R,
    output: &mut W,
    json: bool,
) -> io::Result<()>
where
    S: NumberSource,
    R: BufRead,
    W: Write,
{
    service.new_game();
    print_intro(service, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::try_from(line.as_str()) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::NewGame => {
                service.new_game();
                writeln!(output, "New game started.")?;
            }
            Command::Guess(_) if service.current_game().is_some_and(Game::is_over) => {
                writeln!(output, "This game is over. Type `new` to play again.")?;
            }
            Command::Guess(n) => {
                if !service.source().range().contains(&n) {
                    warn!(guess = n, "guess outside of the secret range");
                    let range = service.source().range();
                    writeln!(
                        output,
                        "Note: {} is outside {}..={}",
                        n,
                        range.start(),
                        range.end()
                    )?;
                }

                match service.guess(n) {
                    Ok(report) if json => {
                        let line = serde_json::to_string(&report).map_err(io::Error::other)?;
                        writeln!(output, "{}", line)?;
                    }
                    Ok(report) => print_report(&report, service.current_game(), output)?,
                    Err(UsageError::NoGameInProgress) => {
                        writeln!(output, "{}", UsageError::NoGameInProgress)?;
                    }
                }
            }
        }
    }

    output.flush()
}
