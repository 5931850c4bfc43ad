//! Command-line definition.
//!
//! Flags take effect for the tokens after them, so clap is only used to
//! validate the arguments; the directives are then replayed in the order they
//! were written, using the argument indices clap records.

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use thiserror::Error;

pub const USAGE: &str = "note2tab [-l][-k key][-s shift][-c clef] [(][#|b|%]pos ...[)]";

/// Bad or missing arguments; reported with the usage line.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct UsageError {
    pub reason: String,
}

impl UsageError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Convert staff note positions into guitar tablature
///
/// Positions count lines and spaces of the staff; in the G clef 0 is the d
/// of the open D string, in the F clef 0 is an f. A leading `#` or `b` adds a
/// sharp or flat, `%` forces a natural regardless of the key. A token
/// starting with `(` is a chord, e.g. "(0 2 4)".
#[derive(Debug, Parser)]
#[command(name = "note2tab", version, override_usage = USAGE)]
pub struct Cli {
    /// Print each tab on one line instead of as a fretboard diagram
    #[arg(short = 'l', action = ArgAction::Count)]
    pub one_line: u8,

    /// Transpose following notes by this many half-steps
    #[arg(short = 's', allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Clef of following notes: g (treble) or f (bass)
    #[arg(short = 'c')]
    pub clef: Option<String>,

    /// Key signature, e.g. "#3 #6" or "b5"
    #[arg(short = 'k', allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Notes ("3", "#4", "b-2", "%5") or chords ("(0 2 4)")
    #[arg(allow_negative_numbers = true)]
    pub notes: Vec<String>,
}

/// One step of the command line, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    OneLine,
    Shift(i32),
    Clef(String),
    Key(String),
    Note(String),
    Chord(String),
}

impl Directive {
    fn token(token: String) -> Self {
        if token.starts_with('(') {
            Self::Chord(token)
        } else {
            Self::Note(token)
        }
    }
}

/// Parsed command line.
#[derive(Debug)]
pub struct Invocation {
    pub show_config: bool,
    pub directives: Vec<Directive>,
}

impl Invocation {
    /// Parse arguments, letting clap handle `--help` and `--version` itself.
    ///
    /// # Errors
    ///
    /// Any other clap failure (unknown flag, repeated `-s`/`-c`/`-k`, missing
    /// or malformed value) becomes a [`UsageError`].
    pub fn parse_from<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .map_err(|e| match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => UsageError::new(e.to_string().lines().next().unwrap_or_default()),
            })?;
        let cli = Cli::from_arg_matches(&matches).map_err(|e| UsageError::new(e.to_string()))?;
        Ok(Self {
            show_config: cli.show_config,
            directives: ordered(&matches, cli),
        })
    }
}

/// Indices of every command-line occurrence of `id`.
fn indices(matches: &ArgMatches, id: &str) -> Vec<usize> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return Vec::new();
    }
    matches
        .indices_of(id)
        .map(Iterator::collect)
        .unwrap_or_default()
}

fn ordered(matches: &ArgMatches, cli: Cli) -> Vec<Directive> {
    let mut directives: Vec<(usize, Directive)> = Vec::new();

    if cli.one_line > 0 {
        if let Some(&index) = indices(matches, "one_line").first() {
            directives.push((index, Directive::OneLine));
        }
    }
    if let (Some(shift), Some(&index)) = (cli.shift, indices(matches, "shift").first()) {
        directives.push((index, Directive::Shift(shift)));
    }
    if let (Some(clef), Some(&index)) = (cli.clef, indices(matches, "clef").first()) {
        directives.push((index, Directive::Clef(clef)));
    }
    if let (Some(key), Some(&index)) = (cli.key, indices(matches, "key").first()) {
        directives.push((index, Directive::Key(key)));
    }
    directives.extend(
        indices(matches, "notes")
            .into_iter()
            .zip(cli.notes)
            .map(|(index, token)| (index, Directive::token(token))),
    );

    directives.sort_by_key(|(index, _)| *index);
    directives.into_iter().map(|(_, d)| d).collect()
}
