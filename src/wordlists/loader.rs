//! Dictionary loading
//!
//! Reads whitespace-separated tokens into a bounded word list.

use log::warn;
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Maximum number of words a session can hold
pub const MAX_WORDS: usize = 200;

/// Ordered, capacity-bounded list of dictionary words
///
/// Words keep their insertion order. Loading stops silently once the list is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    capacity: usize,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl WordList {
    /// Create an empty list holding at most [`MAX_WORDS`] words
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_WORDS)
    }

    /// Create an empty list with a custom capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append whitespace-separated tokens from `text`
    ///
    /// Returns the number of words actually added.
    ///
    /// # Examples
    /// ```
    /// use unscramble::wordlists::loader::WordList;
    ///
    /// let mut list = WordList::with_capacity(3);
    /// assert_eq!(list.extend_from_str("cat dog\nsun  tree"), 3);
    /// assert_eq!(list.words(), &["cat", "dog", "sun"]);
    /// ```
    pub fn extend_from_str(&mut self, text: &str) -> usize {
        self.extend_tokens(text.split_whitespace())
    }

    /// Append words from a slice, e.g. one of the embedded dictionaries
    pub fn extend_from_slice(&mut self, words: &[&str]) -> usize {
        self.extend_tokens(words.iter().copied().flat_map(str::split_whitespace))
    }

    /// Append tokens read line by line from `reader`
    ///
    /// Lines that are not valid UTF-8 are decoded lossily rather than dropped.
    /// Reading stops as soon as the list is full, or at the first read error;
    /// either way the return value counts every word that was added.
    pub fn extend_from_reader<R: BufRead>(&mut self, mut reader: R) -> usize {
        let mut added = 0;
        let mut line = Vec::new();
        while !self.is_full() {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    let text = String::from_utf8_lossy(&line);
                    if let Cow::Owned(_) = text {
                        warn!("Dictionary line is not valid UTF-8: {}", text.trim_end());
                    }
                    added += self.extend_from_str(&text);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    warn!("Stopped reading dictionary after {added} words: {e}");
                    break;
                }
            }
        }
        added
    }

    fn extend_tokens<'t>(&mut self, tokens: impl Iterator<Item = &'t str>) -> usize {
        let before = self.words.len();
        let room = self.remaining();
        self.words.extend(tokens.take(room).map(str::to_string));
        self.words.len() - before
    }

    /// All loaded words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of words that can still be added
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.words.len())
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

/// Append words from a dictionary file
///
/// Returns the number of words added, including those read before a
/// mid-file read error.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::{WordList, load_from_file};
///
/// let mut words = WordList::new();
/// let added = load_from_file(&mut words, "dictionary.txt").unwrap();
/// println!("Loaded {added} words");
/// ```
pub fn load_from_file<P: AsRef<Path>>(list: &mut WordList, path: P) -> io::Result<usize> {
    let file = fs::File::open(path)?;
    Ok(list.extend_from_reader(io::BufReader::new(file)))
}
