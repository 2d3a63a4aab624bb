//! Command implementations for the spellcheck CLI.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::error::{Result, SpellcheckError};
use crate::spelling::{Dictionary, VariationGenerator, load_word_file};

/// Execute a CLI command.
pub fn execute_command(args: SpellcheckArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_words(check_args.clone(), &args),
        Command::Variations(variation_args) => list_variations(variation_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Check every query word against the word list.
fn check_words(args: CheckArgs, cli_args: &SpellcheckArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading dictionary config from {}", path.display());
            DictionaryConfig::from_file(path)?
        }
        None => DictionaryConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }

    let (dictionary, _) = load_dictionary(&args.words, config)?;

    let start_time = Instant::now();
    let results = dictionary.search_many(args.query.as_slice());
    let misspelled = results.iter().filter(|result| !result.found).count();

    output_result(
        "Check complete",
        &CheckResults {
            results,
            misspelled,
            depth: dictionary.depth(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the candidates generated for a word.
fn list_variations(args: VariationsArgs, cli_args: &SpellcheckArgs) -> Result<()> {
    let mut config = DictionaryConfig::new(args.depth);
    if let Some(alphabet) = args.alphabet {
        config = config.with_alphabet(alphabet);
    }
    config.validate()?;

    let generator = VariationGenerator::from_config(&config);
    let variations = generator.generate(&args.word, args.depth);

    output_result(
        "Variations generated",
        &VariationResults {
            word: args.word,
            depth: args.depth,
            alphabet: generator.alphabet().iter().collect(),
            count: variations.len(),
            variations: (!args.count_only).then_some(variations),
        },
        cli_args,
    )
}

/// Load a word list and report on it.
fn show_stats(args: StatsArgs, cli_args: &SpellcheckArgs) -> Result<()> {
    let start_time = Instant::now();
    let (dictionary, lines_read) = load_dictionary(&args.words, DictionaryConfig::default())?;

    output_result(
        "Word list loaded",
        &WordListStats {
            path: args.words.to_string_lossy().to_string(),
            lines_read,
            distinct_words: dictionary.word_count(),
            load_time_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Build a dictionary from a word list file.
/// Returns the dictionary and the number of words read.
fn load_dictionary(path: &Path, config: DictionaryConfig) -> Result<(Dictionary, usize)> {
    let dictionary = Dictionary::with_config(config)?;
    let source = load_word_file(path).map_err(|e| match e {
        SpellcheckError::Io(io) => SpellcheckError::invalid_argument(format!(
            "cannot read word list {}: {io}",
            path.display()
        )),
        other => other,
    })?;

    let start_time = Instant::now();
    let lines_read = dictionary.populate(source);
    info!(
        "loaded {} words from {} in {}ms",
        dictionary.word_count(),
        path.display(),
        start_time.elapsed().as_millis()
    );

    if dictionary.is_empty() {
        return Err(SpellcheckError::invalid_argument(format!(
            "word list {} is empty",
            path.display()
        )));
    }

    Ok((dictionary, lines_read))
}
