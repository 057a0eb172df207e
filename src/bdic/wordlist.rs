//! Reading word lists from text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::error::Result;

/// Layout of a word list file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum WordlistFormat {
    /// Hunspell `.dic` layout: the first line holds the word count and is skipped.
    #[default]
    Dic,
    /// One word per line. Lines starting with `#` are comments.
    Plain,
}

impl WordlistFormat {
    fn skips_first_line(self) -> bool {
        self == WordlistFormat::Dic
    }

    fn word(self, line: &str) -> Option<&str> {
        let word = line.trim();
        if word.is_empty() || (self == WordlistFormat::Plain && is_comment(word)) {
            None
        } else {
            Some(word)
        }
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Extracts the words from the text of a word list, trimmed and in file order.
pub fn parse_wordlist(text: &str, format: WordlistFormat) -> Vec<String> {
    let skip = usize::from(format.skips_first_line());
    text.lines()
        .skip(skip)
        .filter_map(|line| format.word(line))
        .map(str::to_owned)
        .collect()
}

/// Reads a word list file. Words are returned in file order, not sorted.
///
/// # Errors
///
/// Returns [`BdicError::Io`](super::error::BdicError::Io) if the file cannot
/// be opened or is not valid UTF-8.
pub fn read_wordlist(path: impl AsRef<Path>, format: WordlistFormat) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();

    // One reused line buffer instead of an allocation per line.
    let mut buf = String::with_capacity(80);
    let mut first = true;
    while reader.read_line(&mut buf)? != 0 {
        if !(first && format.skips_first_line()) {
            if let Some(word) = format.word(&buf) {
                words.push(word.to_owned());
            }
        }
        first = false;
        buf.clear();
    }
    debug!(path = %path.display(), words = words.len(), "read word list");
    Ok(words)
}
