//! Problem fixtures: built-in, loaded from JSON, or randomly generated.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use anyhow::Context;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// One word ladder problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub start: String,
    pub end: String,
    pub dictionary: Vec<String>,
}

impl Problem {
    pub fn new<S, I, W>(start: S, end: S, dictionary: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Problem {
            start: start.into(),
            end: end.into(),
            dictionary: dictionary.into_iter().map(Into::into).collect(),
        }
    }

    /// The same problem with start and end exchanged.
    pub fn swapped(&self) -> Problem {
        Problem {
            start: self.end.clone(),
            end: self.start.clone(),
            dictionary: self.dictionary.clone(),
        }
    }
}

/// The fixtures every solution is compared on by default.
pub fn builtin_fixtures() -> Vec<Problem> {
    vec![
        Problem::new("hit", "cog", ["hot", "dot", "dog", "lot", "log"]),
        Problem::new(
            "hit",
            "cog",
            [
                "hat", "hot", "dot", "dog", "lot", "log", "fog", "col", "hut", "mut", "mug",
                "dug", "lug", "cug", "dig", "dag",
            ],
        ),
        Problem::new(
            "aaa",
            "zzz",
            [
                "aab", "aba", "abb", "bbb", "bbc", "bcc", "ccc", "ccd", "cce", "cee", "zcz",
                "zze", "zzb", "zzc", "zzz", "ccz",
            ],
        ),
    ]
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Many(Vec<Problem>),
    One(Problem),
}

/// Load problems from a JSON file holding either one problem or a list.
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture file {}", path.display()))?;
    let problems = match serde_json::from_str::<FixtureFile>(&content)? {
        FixtureFile::Many(problems) => problems,
        FixtureFile::One(problem) => vec![problem],
    };
    debug!("loaded {} fixtures from {}", problems.len(), path.display());
    Ok(problems)
}

/// Load fixtures from `path`, or fall back to the built-in ones.
pub fn fixtures_or_builtin<P: AsRef<Path>>(path: Option<P>) -> Result<Vec<Problem>> {
    match path {
        Some(path) => load_fixtures(path),
        None => Ok(builtin_fixtures()),
    }
}

/// Load a word list with one word per line.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comments are
/// skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open word list {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && !word.starts_with('#') {
            words.push(word.to_string());
        }
    }
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Generate a random lowercase problem.
///
/// The dictionary is produced by a random walk of single-letter changes
/// starting at the start word, so a ladder to the end word (the last new
/// word of the walk) always exists. The same seed always yields the same
/// problem.
pub fn generate_problem(size: usize, length: usize, seed: u64) -> Result<Problem> {
    if length == 0 {
        return Err(LadderError::invalid_argument("word length must be positive"));
    }
    if size == 0 {
        return Err(LadderError::invalid_argument("dictionary size must be positive"));
    }
    let capacity = u32::try_from(length)
        .ok()
        .and_then(|exp| 26usize.checked_pow(exp))
        .unwrap_or(usize::MAX);
    if size >= capacity {
        return Err(LadderError::invalid_argument(format!(
            "cannot generate {size} distinct words of length {length}"
        )));
    }

    random_walk_problem(size, length, seed, size.saturating_mul(1000))
}

fn random_walk_problem(size: usize, length: usize, seed: u64, max_steps: usize) -> Result<Problem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start: Vec<u8> = (0..length).map(|_| rng.random_range(b'a'..=b'z')).collect();

    let mut seen: AHashSet<Vec<u8>> = AHashSet::new();
    seen.insert(start.clone());
    let mut dictionary: Vec<String> = Vec::with_capacity(size);
    let mut current = start.clone();
    let mut steps = 0usize;

    while dictionary.len() < size && steps < max_steps {
        steps += 1;
        let position = rng.random_range(0..length);
        current[position] = rng.random_range(b'a'..=b'z');
        if seen.insert(current.clone()) {
            dictionary.push(ascii_word(&current));
        }
    }

    if dictionary.len() < size {
        return Err(LadderError::other(format!(
            "random walk found only {} of {size} words in {max_steps} steps",
            dictionary.len()
        )));
    }

    let end = match dictionary.last() {
        Some(word) => word.clone(),
        None => return Err(LadderError::other("random walk produced no words")),
    };

    Ok(Problem {
        start: ascii_word(&start),
        end,
        dictionary,
    })
}

fn ascii_word(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
