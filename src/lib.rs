//! Minimal generic backtracking pattern matcher over pluggable text views.
//!
//! The grammar is four specials plus literals: `^` (anchor at start), `$`
//! (anchor at end), `.` (any single element), `*` (zero or more of the one
//! preceding atom). No grouping, alternation, classes, or captures.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ pattern.rs  │────▶│   view.rs    │────▶│  matcher.rs  │
//! │  (Pattern)  │     │ (TextView,   │     │ (is_match,   │
//! │             │     │  4 views)    │     │  match_star) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │   bench.rs   │
//!                                          │ (benchmark)  │
//!                                          └──────────────┘
//! ```
//!
//! The matcher is written once, generically, against the [`TextView`] trait.
//! A view decides what one "element" of text is: a UTF-8 byte, a UTF-16 code
//! unit, a Unicode scalar, or an extended grapheme cluster. The same pattern
//! can match under one view and fail under another - `"é"` in decomposed form
//! is one cluster but two scalars - and that divergence is intended behavior.
//!
//! # Usage
//!
//! ```
//! use murex::{filter_matches, is_match, Clusters, Pattern, Scalars};
//!
//! let p = Pattern::new("^h..lo*!$");
//! assert!(is_match::<Clusters>(&p, "hellooooo!"));
//! assert!(!is_match::<Clusters>(&p, "help!"));
//!
//! let strings = ["foo", "bar", "baz"];
//! let prefix = Pattern::new("^b..");
//! assert_eq!(filter_matches::<Scalars, _>(&strings, &prefix), vec!["bar", "baz"]);
//! ```
//!
//! There is no error taxonomy: every outcome is a boolean. Malformed pattern
//! fragments are not rejected, they traverse like any other elements and
//! usually fail to match. The one hardening extension is
//! [`is_match_bounded`], a step-count ceiling for pathological star stacking.

// Module declarations
mod bench;
mod matcher;
mod pattern;
pub mod testing;
mod view;

// Re-exports for public API
pub use bench::{benchmark, benchmark_report, BenchReport};
pub use matcher::{filter_matches, is_match, is_match_bounded};
pub use pattern::Pattern;
pub use view::{Clusters, Scalars, TextView, Utf16Units, Utf8Units};
