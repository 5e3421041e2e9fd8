//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Corpus generation is deliberately deterministic (word cycling, no RNG), so
//! test failures and bench numbers reproduce exactly across runs.

#![doc(hidden)]

/// Vocabulary for synthetic corpora. Includes accented entries so cluster and
/// scalar views exercise multi-byte elements.
pub const WORDS: &[&str] = &[
    "hello",
    "help",
    "world",
    "pattern",
    "matcher",
    "anchor",
    "wildcard",
    "star",
    "backtrack",
    "element",
    "cluster",
    "scalar",
    "café",
    "naïve",
    "résumé",
    "tōkyō",
    "überfahrt",
    "straße",
];

/// One deterministic line: `words` entries from [`WORDS`], offset by `seed`.
pub fn sample_line(seed: usize, words: usize) -> String {
    (0..words)
        .map(|i| WORDS[(seed + i * 7) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// A newline-separated corpus of `lines` lines, `words_per_line` words each.
pub fn sample_corpus(lines: usize, words_per_line: usize) -> String {
    (0..lines)
        .map(|i| sample_line(i, words_per_line))
        .collect::<Vec<_>>()
        .join("\n")
}
