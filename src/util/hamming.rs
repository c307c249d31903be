//! Hamming distance helpers.
//!
//! Word ladders only ever change a single letter in place, so adjacency
//! between two words is the Hamming distance being exactly one. Callers
//! guarantee equal lengths; with unequal lengths the trailing characters of
//! the longer word are ignored.

/// Count the positions at which two words differ.
pub fn hamming_distance(w1: &str, w2: &str) -> usize {
    w1.chars().zip(w2.chars()).filter(|(a, b)| a != b).count()
}

/// Check whether two words differ in exactly one position.
///
/// Stops scanning as soon as a second difference is found.
pub fn is_next_to(w1: &str, w2: &str) -> bool {
    let mut differences = 0;
    for (a, b) in w1.chars().zip(w2.chars()) {
        if a != b {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// Replace the character at `position` with `wildcard`.
///
/// Returns `None` when `position` is past the end of the word.
pub fn wildcard_pattern(word: &str, position: usize, wildcard: char) -> Option<String> {
    let mut pattern = String::with_capacity(word.len());
    let mut replaced = false;
    for (i, c) in word.chars().enumerate() {
        if i == position {
            pattern.push(wildcard);
            replaced = true;
        } else {
            pattern.push(c);
        }
    }
    replaced.then_some(pattern)
}
