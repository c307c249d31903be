//! The set of words a ladder may step through.

use ahash::AHashSet;
use log::trace;

use crate::error::{LadderError, Result};

/// Dictionary words plus the two endpoints, without duplicates.
///
/// Words keep their first-seen order: dictionary entries first, then the
/// start and end words if the dictionary did not already contain them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    start: String,
    end: String,
}

impl Vocabulary {
    /// Build a vocabulary without checking the input preconditions.
    ///
    /// Duplicates are silently collapsed.
    pub fn new<I, S>(dictionary: I, start: &str, end: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = AHashSet::new();
        let mut words = Vec::new();
        for word in dictionary
            .into_iter()
            .map(Into::into)
            .chain([start.to_string(), end.to_string()])
        {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        trace!("vocabulary of {} words for {start} -> {end}", words.len());

        Vocabulary {
            words,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Build a vocabulary, failing fast on malformed input.
    ///
    /// Rejects empty words, words whose length differs from the start word,
    /// and dictionary entries that appear more than once. A dictionary that
    /// contains the start or end word is accepted.
    pub fn validated<I, S>(dictionary: I, start: &str, end: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dictionary: Vec<String> = dictionary.into_iter().map(Into::into).collect();
        let expected = start.chars().count();

        if expected == 0 {
            return Err(LadderError::malformed_input("start word is empty"));
        }
        if end.chars().count() != expected {
            return Err(LadderError::malformed_input(format!(
                "start '{start}' and end '{end}' differ in length"
            )));
        }

        {
            let mut seen = AHashSet::with_capacity(dictionary.len());
            for word in &dictionary {
                if word.chars().count() != expected {
                    return Err(LadderError::malformed_input(format!(
                        "dictionary word '{word}' does not have length {expected}"
                    )));
                }
                if !seen.insert(word.as_str()) {
                    return Err(LadderError::malformed_input(format!(
                        "dictionary word '{word}' appears more than once"
                    )));
                }
            }
        }

        Ok(Self::new(dictionary, start, end))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
