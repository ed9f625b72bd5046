use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::info;

use crate::Error;

/// How the terminal front-end reports game events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("Invalid OUTPUT_FORMAT '{other}'"))),
        }
    }
}

pub struct Config {
    pub dictionary_path: String,
    pub start_words_path: String,
    pub output_format: OutputFormat,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let dictionary_path =
        env::var("DICTIONARY_FILE_PATH").unwrap_or_else(|_| "/usr/share/dict/words".to_string());

    let start_words_path =
        env::var("START_WORDS_FILE_PATH").unwrap_or_else(|_| "./data/start.txt".to_string());

    let output_format = env::var("OUTPUT_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .parse::<OutputFormat>()?;

    Ok(Config {
        dictionary_path,
        start_words_path,
        output_format,
    })
}
