// SPDX-License-Identifier: Apache-2.0

//! The recursive backtracking matcher.
//!
//! The grammar is deliberately minimal: literal elements, `.` (any single
//! element), `*` (zero or more of the one preceding atom), `^` (match only at
//! the start), `$` (match only at the end). No grouping, no alternation, no
//! character classes, no capture groups.
//!
//! The algorithm is the classic pair of mutually recursive functions,
//! `match_here` and `match_star`, operating on element subslices. `match_star`
//! is a linear greedy-with-backoff walk, not an NFA/DFA construction: there is
//! no memoization, and stacked stars are exponential in the worst case. Every
//! function here is pure; repeated calls with identical inputs always return
//! identical results.
//!
//! Malformed fragments are not errors. A `$` that is not the final element is
//! an ordinary literal, and a leading `*` with no preceding atom is too; both
//! simply traverse and usually fail to match.

use crate::pattern::Pattern;
use crate::view::TextView;

/// Step-count ceiling threaded through the recursion.
///
/// One step is charged per `match_here` entry. The unlimited budget never
/// exhausts, so the unbounded entry points cannot observe `None`.
struct StepBudget {
    remaining: Option<usize>,
}

impl StepBudget {
    fn unlimited() -> Self {
        StepBudget { remaining: None }
    }

    fn limited(max_steps: usize) -> Self {
        StepBudget {
            remaining: Some(max_steps),
        }
    }

    /// Charge one step. False means the budget is exhausted.
    fn step(&mut self) -> bool {
        match &mut self.remaining {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// Does `pattern` match anywhere in `text` under view `R`?
///
/// A pattern starting with `^` is tried exactly once, anchored at the start.
/// Any other pattern is tried at every offset left to right, including the
/// empty suffix at the end, so the empty pattern matches every text.
///
/// ```
/// use murex::{is_match, Pattern, Scalars, Utf8Units};
///
/// let p = Pattern::new("^h..lo*!$");
/// assert!(is_match::<Scalars>(&p, "hellooooo!"));
/// assert!(!is_match::<Utf8Units>(&p, "help!"));
/// ```
pub fn is_match<'a, R: TextView<'a>>(pattern: &'a Pattern, text: &'a str) -> bool {
    let pat = R::view(pattern.as_str());
    let text = R::view(text);
    // The unlimited budget never exhausts.
    search::<R>(&pat, &text, &mut StepBudget::unlimited()).unwrap_or(false)
}

/// [`is_match`] under a step-count ceiling.
///
/// Returns `None` when `max_steps` recursion steps are spent before a verdict,
/// which only happens on pathological star stacking. This is a hardening
/// extension beyond the minimal contract; `is_match` itself stays unbounded.
pub fn is_match_bounded<'a, R: TextView<'a>>(
    pattern: &'a Pattern,
    text: &'a str,
    max_steps: usize,
) -> Option<bool> {
    let pat = R::view(pattern.as_str());
    let text = R::view(text);
    search::<R>(&pat, &text, &mut StepBudget::limited(max_steps))
}

/// Keep the strings that match `pattern`.
///
/// ```
/// use murex::{filter_matches, Pattern, Scalars};
///
/// let strings = ["foo", "bar", "baz"];
/// let pattern = Pattern::new("^b..");
/// assert_eq!(filter_matches::<Scalars, _>(&strings, &pattern), vec!["bar", "baz"]);
/// ```
pub fn filter_matches<'a, R, S>(strings: &'a [S], pattern: &'a Pattern) -> Vec<&'a str>
where
    R: TextView<'a>,
    S: AsRef<str>,
{
    strings
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| is_match::<R>(pattern, s))
        .collect()
}

/// Anchored dispatch plus the offset-by-offset search loop.
fn search<'a, R: TextView<'a>>(
    pat: &[R::Element],
    text: &[R::Element],
    budget: &mut StepBudget,
) -> Option<bool> {
    if pat.first() == Some(&R::CARET) {
        return match_here::<R>(&pat[1..], text, budget);
    }
    // Every start offset, including the empty suffix past the last element.
    for start in 0..=text.len() {
        if match_here::<R>(pat, &text[start..], budget)? {
            return Some(true);
        }
    }
    Some(false)
}

/// Match `pat` against the start of `text`.
fn match_here<'a, R: TextView<'a>>(
    pat: &[R::Element],
    text: &[R::Element],
    budget: &mut StepBudget,
) -> Option<bool> {
    if !budget.step() {
        return None;
    }

    // An empty pattern matches anything.
    let Some((&first, rest)) = pat.split_first() else {
        return Some(true);
    };

    // atom `*` rest... : hand the atom to the star loop.
    if rest.first() == Some(&R::ASTERISK) {
        return match_star::<R>(first, &rest[1..], text, budget);
    }

    // A final `$` matches exactly the empty remainder. Anywhere else in the
    // pattern, `$` falls through below as an ordinary literal.
    if first == R::DOLLAR && rest.is_empty() {
        return Some(text.is_empty());
    }

    if let Some((&head, tail)) = text.split_first() {
        if first == R::PERIOD || first == head {
            return match_here::<R>(rest, tail, budget);
        }
    }

    Some(false)
}

/// Match zero or more `atom`s followed by `pat`, shortest consumption first.
fn match_star<'a, R: TextView<'a>>(
    atom: R::Element,
    pat: &[R::Element],
    mut text: &[R::Element],
    budget: &mut StepBudget,
) -> Option<bool> {
    loop {
        if match_here::<R>(pat, text, budget)? {
            return Some(true);
        }
        match text.split_first() {
            Some((&head, tail)) if atom == R::PERIOD || head == atom => text = tail,
            _ => return Some(false),
        }
    }
}
