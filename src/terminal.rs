//! Line-oriented front-end for the game
//!
//! Every input line is either a command (`:restart`, `:words`, `:quit`) or a
//! candidate word. Output is a plain transcript or one JSON object per event.

use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::game::{GameSession, RootWordSource};
use crate::validation::{Rejection, ValidationOutcome, WordOracle};

pub const CMD_RESTART: &str = ":restart";
pub const CMD_WORDS: &str = ":words";
pub const CMD_QUIT: &str = ":quit";

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Started {
        root_word: &'a str,
    },
    Submitted {
        word: &'a str,
        outcome: ValidationOutcome,
        score: usize,
    },
    Words {
        used_words: &'a [String],
        score: usize,
    },
    UnknownCommand {
        command: &'a str,
    },
}

/// Alert title and message shown for a rejected word
pub fn rejection_message(rejection: Rejection, root_word: &str) -> (&'static str, String) {
    match rejection {
        Rejection::AlreadyUsed => ("Word already used", "Try another word".to_string()),
        Rejection::NotPossible => (
            "Word isn't possible",
            format!("Can't spell that word from '{root_word}'"),
        ),
        Rejection::NotExisting => ("Word doesn't exist", "Try an existing one".to_string()),
    }
}

/// Play until `:quit` or end of input
pub fn run<O, R, I, W>(
    session: &mut GameSession<O>,
    source: &RootWordSource,
    rng: &mut R,
    input: I,
    output: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    O: WordOracle,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut printer = Printer { output, format };

    session.start(&source.pick(rng));
    printer.started(session)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            CMD_QUIT => break,
            CMD_RESTART => {
                session.start(&source.pick(rng));
                printer.started(session)?;
            }
            CMD_WORDS => printer.words(session)?,
            cmd if cmd.starts_with(':') => {
                debug!("Unknown command '{}'", cmd);
                printer.emit(&Event::UnknownCommand { command: cmd }, || {
                    format!(
                        "Unknown command '{cmd}'. Commands: {CMD_RESTART}, {CMD_WORDS}, {CMD_QUIT}"
                    )
                })?;
            }
            _ => {
                let outcome = session.submit(&line)?;
                printer.submitted(session, &line, outcome)?;
            }
        }
    }

    info!(
        "Game over: {} words, score {}",
        session.used_words().len(),
        session.score()
    );

    Ok(())
}

struct Printer<'w, W> {
    output: &'w mut W,
    format: OutputFormat,
}

impl<W: Write> Printer<'_, W> {
    /// Write `event` as JSON, or the text from `text` when printing a transcript
    fn emit(&mut self, event: &Event<'_>, text: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.output, event)?;
                writeln!(self.output)?;
            }
            OutputFormat::Text => writeln!(self.output, "{}", text())?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn started<O: WordOracle>(&mut self, session: &GameSession<O>) -> Result<()> {
        let root_word = session.root_word().unwrap_or_default();
        self.emit(&Event::Started { root_word }, || {
            format!("\n== {root_word} ==\nYour score: {}", session.score())
        })
    }

    fn words<O: WordOracle>(&mut self, session: &GameSession<O>) -> Result<()> {
        let used_words = session.used_words();
        let score = session.score();
        self.emit(&Event::Words { used_words, score }, || {
            let mut text = String::new();
            for word in used_words {
                text.push_str(&format!("({}) {word}\n", word.chars().count()));
            }
            text.push_str(&format!("Your score: {score}"));
            text
        })
    }

    fn submitted<O: WordOracle>(
        &mut self,
        session: &GameSession<O>,
        line: &str,
        outcome: ValidationOutcome,
    ) -> Result<()> {
        let score = session.score();
        let word = line.trim();
        let event = Event::Submitted {
            word,
            outcome,
            score,
        };

        match (self.format, outcome) {
            // Nothing to say in a transcript
            (OutputFormat::Text, ValidationOutcome::Ignored) => Ok(()),
            (_, ValidationOutcome::Accepted) => self.emit(&event, || {
                let accepted = session.used_words().first().map_or("", String::as_str);
                format!("({}) {accepted}    Your score: {score}", accepted.chars().count())
            }),
            (_, ValidationOutcome::Rejected(rejection)) => self.emit(&event, || {
                let (title, message) =
                    rejection_message(rejection, session.root_word().unwrap_or_default());
                format!("{title}: {message}")
            }),
            (OutputFormat::Json, ValidationOutcome::Ignored) => self.emit(&event, String::new),
        }
    }
}
