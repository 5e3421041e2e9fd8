// SPDX-License-Identifier: Apache-2.0

//! The pattern wrapper.
//!
//! A [`Pattern`] is nothing more than the raw expression string. There is no
//! compiled automaton and no construction-time validation: the grammar
//! (`^ $ . *` plus literals) is interpreted lazily, element by element, during
//! matching. A malformed fragment is never rejected up front - it simply
//! participates in traversal and usually fails to match.

use std::fmt;

/// An immutable pattern over the minimal `^ $ . *` grammar.
///
/// ```
/// use murex::{is_match, Clusters, Pattern};
///
/// let p = Pattern::new("^h..lo*!$");
/// assert!(is_match::<Clusters>(&p, "hellooooo!"));
/// assert_eq!(p.to_string(), "/^h..lo*!$/");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    raw: String,
}

impl Pattern {
    /// Wrap a raw expression string. Never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        Pattern { raw: raw.into() }
    }

    /// The raw expression, exactly as constructed.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Pattern::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Pattern { raw }
    }
}

/// Short diagnostic form: `/<raw>/`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.raw)
    }
}

/// Verbose diagnostic form: `{expression: <raw>}`.
impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{expression: {}}}", self.raw)
    }
}
