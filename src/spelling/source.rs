//! Word sources used to populate a dictionary.
//!
//! A source is consumed exactly once. Failures on the producing side, such as
//! an unreadable or truncated stream, simply end the sequence early: the
//! dictionary receives fewer words and stays valid.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::error::Result;

/// A finite sequence of candidate words, consumed once.
pub trait WordSource {
    type Words: Iterator<Item = String>;

    /// Turn the source into its sequence of words.
    fn into_words(self) -> Self::Words;
}

/// Reads one word per line from any buffered reader.
///
/// Lines are trimmed and blank lines are skipped. The first read error is
/// logged and ends the sequence.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    failed: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource {
            reader,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.failed {
            return None;
        }

        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let word = line.trim();
                    if !word.is_empty() {
                        return Some(word.to_string());
                    }
                }
                Err(e) => {
                    warn!("word source stopped early: {e}");
                    self.failed = true;
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> WordSource for LineSource<R> {
    type Words = Self;

    fn into_words(self) -> Self {
        self
    }
}

impl WordSource for Vec<String> {
    type Words = std::vec::IntoIter<String>;

    fn into_words(self) -> Self::Words {
        self.into_iter()
    }
}

impl<'a, 'b> WordSource for &'a [&'b str] {
    type Words = std::iter::Map<std::slice::Iter<'a, &'b str>, fn(&&'b str) -> String>;

    fn into_words(self) -> Self::Words {
        let to_owned: fn(&&'b str) -> String = |word| word.to_string();
        self.iter().map(to_owned)
    }
}

/// Open a word list file with one word per line.
pub fn load_word_file<P: AsRef<Path>>(path: P) -> Result<LineSource<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(LineSource::new(BufReader::new(file)))
}
