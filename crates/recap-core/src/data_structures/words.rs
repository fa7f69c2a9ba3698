//! # Word Analysis
//!
//! Letter frequencies over a list of words.
//!
//! All words are joined and lower-cased, then every character is counted.
//! Nothing is filtered: spaces, digits and punctuation present in the input
//! are counted like letters.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::DEFAULT_TOP_LETTERS;

/// A character and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

/// Character counts in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterFrequency(Vec<LetterCount>);

impl LetterFrequency {
    /// Count for `letter`, zero when absent.
    pub fn get(&self, letter: char) -> usize {
        self.0
            .iter()
            .find(|c| c.letter == letter)
            .map_or(0, |c| c.count)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[LetterCount] {
        &self.0
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record(&mut self, letter: char) {
        match self.0.iter_mut().find(|c| c.letter == letter) {
            Some(entry) => entry.count += 1,
            None => self.0.push(LetterCount { letter, count: 1 }),
        }
    }
}

/// Counts every character of the joined, lower-cased words.
pub fn count_letters<S: AsRef<str>>(words: &[S]) -> LetterFrequency {
    let mut frequency = LetterFrequency::default();
    for letter in joined(words).to_lowercase().chars() {
        frequency.record(letter);
    }
    frequency
}

/// The `top_n` most frequent characters, count descending.
///
/// The sort is stable, so equal counts keep first-seen order.
///
/// ## Example
/// ```rust
/// use recap_core::data_structures::words::top_letters;
///
/// let top = top_letters(&["aab", "bb"], 2);
/// assert_eq!((top[0].letter, top[0].count), ('b', 3));
/// assert_eq!((top[1].letter, top[1].count), ('a', 2));
/// ```
pub fn top_letters<S: AsRef<str>>(words: &[S], top_n: usize) -> Vec<LetterCount> {
    let mut ranked = count_letters(words).0;
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

/// Full analysis of a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordAnalysis {
    /// Characters in the joined words, before lower-casing.
    pub total_letters: usize,
    /// Distinct characters after lower-casing.
    pub unique_letters: usize,
    pub letter_count: LetterFrequency,
    pub top_5: Vec<LetterCount>,
}

pub fn analyze_words<S: AsRef<str>>(words: &[S]) -> WordAnalysis {
    let text = joined(words);
    let unique: HashSet<char> = text.to_lowercase().chars().collect();

    WordAnalysis {
        total_letters: text.chars().count(),
        unique_letters: unique.len(),
        letter_count: count_letters(words),
        top_5: top_letters(words, DEFAULT_TOP_LETTERS),
    }
}

/// Splits free text on `delimiter`, verbatim.
///
/// Segments are not trimmed and empty segments are kept, so
/// `"a, b"` yields `["a", " b"]` and the space is later counted.
pub fn parse_word_list(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![input.to_string()];
    }
    input.split(delimiter).map(str::to_string).collect()
}

fn joined<S: AsRef<str>>(words: &[S]) -> String {
    let mut text = String::new();
    for word in words {
        text.push_str(word.as_ref());
    }
    text
}

// =============================================================================
// Unit Tests
// =============================================================================
