use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordscramble::validation::DictionaryValidator;
use wordscramble::{config, terminal, GameSession, RootWordSource};

fn main() -> miette::Result<()> {
    // Logs go to stderr, the game transcript to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Word Scramble");

    let config = config::load_config()?;

    let dictionary = DictionaryValidator::new(&config.dictionary_path)?;
    let source = RootWordSource::from_file(&config.start_words_path)?;

    let mut session = GameSession::new(dictionary);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    terminal::run(
        &mut session,
        &source,
        &mut rand::rng(),
        stdin.lock(),
        &mut stdout,
        config.output_format,
    )?;

    Ok(())
}
