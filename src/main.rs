use std::io;

use clap::Parser;
use hidden_number::{
    cli::Cli,
    number_source::{FixedNumberSource, NumberSource, RandomNumberSource, DEFAULT_RANGE},
    service::GameService,
    terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .init();

    let source: Box<dyn NumberSource> = match (cli.secret, cli.seed) {
        (Some(secret), _) => Box::new(FixedNumberSource::new(secret)),
        (None, Some(seed)) => Box::new(RandomNumberSource::seeded(DEFAULT_RANGE, seed)?),
        (None, None) => Box::new(RandomNumberSource::new(DEFAULT_RANGE)?),
    };
    info!(range = ?source.range(), seed = ?cli.seed, "starting hidden number");

    let mut service = GameService::new(source);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal::run(&mut service, stdin.lock(), &mut stdout, cli.json)?;

    info!(states = service.history().len(), "goodbye");
    Ok(())
}
