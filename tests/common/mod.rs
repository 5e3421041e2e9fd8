//! Shared test utilities and fixtures.

#![allow(dead_code)]

use murex::{is_match, Clusters, Pattern, Scalars, Utf16Units, Utf8Units};

// Re-export canonical test utilities from murex::testing
pub use murex::testing::{sample_corpus, sample_line, WORDS};

/// Assert that a pattern/text pair produces the same verdict under every
/// view. Only meaningful for pure-ASCII inputs, where all four decompositions
/// agree element for element.
pub fn assert_all_views(pattern: &str, text: &str, expected: bool) {
    let p = Pattern::new(pattern);
    assert_eq!(
        is_match::<Utf8Units>(&p, text),
        expected,
        "utf8: {:?} vs {:?}",
        p,
        text
    );
    assert_eq!(
        is_match::<Utf16Units>(&p, text),
        expected,
        "utf16: {:?} vs {:?}",
        p,
        text
    );
    assert_eq!(
        is_match::<Scalars>(&p, text),
        expected,
        "scalar: {:?} vs {:?}",
        p,
        text
    );
    assert_eq!(
        is_match::<Clusters>(&p, text),
        expected,
        "cluster: {:?} vs {:?}",
        p,
        text
    );
}
