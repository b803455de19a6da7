use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::HangmanError;
use crate::rng::GameRng;
use crate::session::normalize_letter;

/// Words used when no word list can be read.
pub const FALLBACK_WORDS: [&str; 5] = ["PROGRAMMIERUNG", "JAVA", "SWING", "LERNZIELE", "KLASSEN"];

/// Conventional location of the word list, relative to the working directory.
pub const DEFAULT_WORD_LIST: &str = "words.txt";

/// Source of raw word-list lines
pub trait WordSource {
    fn read_lines(&self) -> io::Result<Vec<String>>;
}

/// Plain-text file with one word per line
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LIST)
    }
}

impl WordSource for FileWordSource {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// In-memory lines, mostly useful for tests and embedding
impl WordSource for [&str] {
    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.iter().map(|s| s.to_string()).collect())
    }
}

/// Pool of candidate secret words. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from `source`, falling back to [`FALLBACK_WORDS`] when the
    /// source cannot be read or yields nothing usable.
    pub fn load<S: WordSource + ?Sized>(source: &S) -> Self {
        let lines = match source.read_lines() {
            Ok(lines) => lines,
            Err(err) => {
                tracing::warn!(error = %err, "word list unavailable, using built-in words");
                return Self::fallback();
            }
        };

        match Self::from_words(lines) {
            Ok(bank) => {
                tracing::info!(words = bank.len(), "word list loaded");
                bank
            }
            Err(_) => {
                tracing::warn!("word list has no usable words, using built-in words");
                Self::fallback()
            }
        }
    }

    /// Build a bank from raw words. Entries are trimmed and uppercased; blank
    /// entries and entries with non-alphabetic characters are dropped.
    pub fn from_words<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|raw| normalize_word(raw.as_ref()))
            .collect();

        if words.is_empty() {
            return Err(HangmanError::EmptyWordBank);
        }

        Ok(Self { words })
    }

    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Uniformly chosen word
    pub fn pick_random(&self, rng: &mut GameRng) -> &str {
        &self.words[rng.index(self.words.len())]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Every char of the uppercased word must be typeable as a single guess.
    let upper = trimmed.to_uppercase();
    if !upper.chars().all(|c| normalize_letter(c) == Some(c)) {
        tracing::warn!(line = trimmed, "skipping word with non-letter characters");
        return None;
    }

    Some(upper)
}
