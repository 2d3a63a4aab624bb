//! Command line argument parsing for the spellcheck CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spellcheck - check words against a word list and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "spellcheck")]
#[command(about = "Check words against a word list and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellcheckArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check words against a word list
    Check(CheckArgs),

    /// Show the candidates generated for a word
    Variations(VariationsArgs),

    /// Show word list statistics
    Stats(StatsArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE", env = "SPELLCHECK_WORDS")]
    pub words: PathBuf,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Edit depth for suggestions (overrides the config file)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub query: Vec<String>,
}

/// Arguments for listing variations
#[derive(Parser, Debug, Clone)]
pub struct VariationsArgs {
    /// Word to expand
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Edit depth
    #[arg(short, long, default_value = "1")]
    pub depth: usize,

    /// Alphabet used for substitutions and insertions
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Print only the number of candidates
    #[arg(long)]
    pub count_only: bool,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE", env = "SPELLCHECK_WORDS")]
    pub words: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args() {
        let args = SpellcheckArgs::parse_from([
            "spellcheck",
            "-vv",
            "check",
            "--words",
            "words.txt",
            "--depth",
            "2",
            "wrod",
            "rat",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.words, PathBuf::from("words.txt"));
                assert_eq!(check.depth, Some(2));
                assert_eq!(check.query, vec!["wrod", "rat"]);
                assert!(check.config.is_none());
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = SpellcheckArgs::parse_from(["spellcheck", "-v", "-q", "variations", "cat"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_variations_defaults() {
        let args = SpellcheckArgs::parse_from(["spellcheck", "-f", "json", "variations", "cat"]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Variations(variations) => {
                assert_eq!(variations.word, "cat");
                assert_eq!(variations.depth, 1);
                assert!(variations.alphabet.is_none());
                assert!(!variations.count_only);
            }
            _ => panic!("Expected variations command"),
        }
    }

    #[test]
    fn test_check_requires_words() {
        let result =
            SpellcheckArgs::try_parse_from(["spellcheck", "check", "--words", "words.txt"]);
        assert!(result.is_err());
    }
}
