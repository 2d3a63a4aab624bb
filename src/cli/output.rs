//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellcheckArgs};
use crate::error::Result;
use crate::spelling::SearchResult;

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub results: Vec<SearchResult>,
    pub misspelled: usize,
    pub depth: usize,
    pub duration_ms: u64,
}

/// Result structure for the variations command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariationResults {
    pub word: String,
    pub depth: usize,
    pub alphabet: String,
    pub count: usize,
    pub variations: Option<Vec<String>>,
}

/// Word list statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListStats {
    pub path: String,
    pub lines_read: usize,
    pub distinct_words: usize,
    pub load_time_ms: u64,
}

/// Something that knows how to print itself for humans.
pub trait HumanOutput {
    fn print_human(&self, args: &SpellcheckArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellcheckArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellcheckArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for CheckResults {
    fn print_human(&self, args: &SpellcheckArgs) {
        for result in &self.results {
            println!("{}", format_search_result(result));
        }

        if args.verbosity() > 1 {
            println!();
            println!(
                "{} of {} words misspelled (depth {}, {}ms)",
                self.misspelled,
                self.results.len(),
                self.depth,
                self.duration_ms
            );
        }
    }
}

impl HumanOutput for VariationResults {
    fn print_human(&self, _args: &SpellcheckArgs) {
        println!(
            "{} candidates for {:?} at depth {} over [{}]",
            self.count, self.word, self.depth, self.alphabet
        );
        if let Some(variations) = &self.variations {
            for variation in variations {
                println!("  {variation}");
            }
        }
    }
}

impl HumanOutput for WordListStats {
    fn print_human(&self, _args: &SpellcheckArgs) {
        println!("Word List Statistics:");
        println!("═════════════════════");
        println!("Path: {}", self.path);
        println!("Lines read: {}", self.lines_read);
        println!("Distinct words: {}", self.distinct_words);
        println!("Load time: {}ms", self.load_time_ms);
    }
}

/// Format one lookup as a single line.
pub fn format_search_result(result: &SearchResult) -> String {
    if result.found {
        format!("{}: ok", result.word)
    } else if result.suggestions.is_empty() {
        format!("{}: misspelled (no suggestions)", result.word)
    } else {
        format!(
            "{}: misspelled, did you mean {}?",
            result.word,
            result.suggestions.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(word: &str, found: bool, suggestions: &[&str]) -> SearchResult {
        SearchResult {
            word: word.to_string(),
            found,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_search_result() {
        assert_eq!(format_search_result(&result("cat", true, &[])), "cat: ok");
        assert_eq!(
            format_search_result(&result("zzz", false, &[])),
            "zzz: misspelled (no suggestions)"
        );
        assert_eq!(
            format_search_result(&result("rat", false, &["bat", "cat"])),
            "rat: misspelled, did you mean bat, cat?"
        );
    }

    #[test]
    fn test_check_results_serialize() {
        let results = CheckResults {
            results: vec![result("wrod", false, &["word"])],
            misspelled: 1,
            depth: 1,
            duration_ms: 0,
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["misspelled"], 1);
        assert_eq!(value["results"][0]["suggestions"][0], "word");
        assert_eq!(value["results"][0]["found"], false);
    }

    #[test]
    fn test_variation_results_serialize() {
        let results = VariationResults {
            word: "a".to_string(),
            depth: 1,
            alphabet: "xy".to_string(),
            count: 3,
            variations: None,
        };
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["alphabet"], "xy");
        assert_eq!(value["count"], 3);
        assert!(value["variations"].is_null());
    }
}
