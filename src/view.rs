// SPDX-License-Identifier: Apache-2.0

//! Text representations: how a string decomposes into matchable elements.
//!
//! The matcher is written once, generically, against [`TextView`]. A view
//! supplies three things: an equality-comparable element type, the four
//! special elements of the grammar (`^ * . $`) expressed in that type, and a
//! pure conversion from a string to its element sequence.
//!
//! The same input decomposes differently per view. `"é"` in decomposed form
//! is one [`Clusters`] element, two [`Scalars`] elements, and three
//! [`Utf8Units`] elements, so identical patterns can produce different match
//! outcomes depending on the view. That divergence is the point of the
//! abstraction, not a bug.
//!
//! Cluster segmentation is delegated to the `unicode-segmentation` crate;
//! this module never implements Unicode segmentation itself. Note that
//! cluster elements compare as code-point sequences: `"é"` (NFC) and
//! `"e\u{301}"` (NFD) are distinct elements even though they are canonically
//! equivalent.

use unicode_segmentation::UnicodeSegmentation;

/// A decomposition of text into equality-comparable elements.
///
/// The lifetime `'a` is the borrow of the source string; cluster elements are
/// subslices of it. `view` runs once per string per match call, and all
/// subsequent traversal happens on `&[Element]` subslices, so dropping a
/// prefix during matching is O(1) and copy-free.
pub trait TextView<'a> {
    /// One unit of text under this view.
    type Element: Copy + Eq;

    /// Stable view name for diagnostics and benchmark IDs.
    const NAME: &'static str;

    /// The `^` anchor expressed as an element.
    const CARET: Self::Element;
    /// The `*` repetition marker expressed as an element.
    const ASTERISK: Self::Element;
    /// The `.` wildcard expressed as an element.
    const PERIOD: Self::Element;
    /// The `$` anchor expressed as an element.
    const DOLLAR: Self::Element;

    /// Decompose `text` into its element sequence.
    fn view(text: &'a str) -> Vec<Self::Element>;
}

/// UTF-8 code units (`u8`). The cheapest view to produce and traverse.
#[derive(Debug, Clone, Copy)]
pub struct Utf8Units;

impl<'a> TextView<'a> for Utf8Units {
    type Element = u8;

    const NAME: &'static str = "utf8";

    const CARET: u8 = b'^';
    const ASTERISK: u8 = b'*';
    const PERIOD: u8 = b'.';
    const DOLLAR: u8 = b'$';

    fn view(text: &'a str) -> Vec<u8> {
        text.bytes().collect()
    }
}

/// UTF-16 code units (`u16`). Supplementary-plane scalars occupy two
/// elements (a surrogate pair).
#[derive(Debug, Clone, Copy)]
pub struct Utf16Units;

impl<'a> TextView<'a> for Utf16Units {
    type Element = u16;

    const NAME: &'static str = "utf16";

    const CARET: u16 = b'^' as u16;
    const ASTERISK: u16 = b'*' as u16;
    const PERIOD: u16 = b'.' as u16;
    const DOLLAR: u16 = b'$' as u16;

    fn view(text: &'a str) -> Vec<u16> {
        text.encode_utf16().collect()
    }
}

/// Unicode scalar values (`char`). Combining marks are separate elements.
#[derive(Debug, Clone, Copy)]
pub struct Scalars;

impl<'a> TextView<'a> for Scalars {
    type Element = char;

    const NAME: &'static str = "scalar";

    const CARET: char = '^';
    const ASTERISK: char = '*';
    const PERIOD: char = '.';
    const DOLLAR: char = '$';

    fn view(text: &'a str) -> Vec<char> {
        text.chars().collect()
    }
}

/// Extended grapheme clusters (`&str` subslices). The closest view to
/// user-perceived characters: a ZWJ emoji sequence is a single element.
#[derive(Debug, Clone, Copy)]
pub struct Clusters;

impl<'a> TextView<'a> for Clusters {
    type Element = &'a str;

    const NAME: &'static str = "cluster";

    const CARET: &'a str = "^";
    const ASTERISK: &'a str = "*";
    const PERIOD: &'a str = ".";
    const DOLLAR: &'a str = "$";

    fn view(text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "é" as NFD: 'e' followed by U+0301 COMBINING ACUTE ACCENT.
    const E_ACUTE_NFD: &str = "e\u{301}";

    #[test]
    fn views_disagree_on_element_counts() {
        assert_eq!(Utf8Units::view(E_ACUTE_NFD).len(), 3);
        assert_eq!(Utf16Units::view(E_ACUTE_NFD).len(), 2);
        assert_eq!(Scalars::view(E_ACUTE_NFD).len(), 2);
        assert_eq!(Clusters::view(E_ACUTE_NFD).len(), 1);
    }

    #[test]
    fn surrogate_pairs_split_only_under_utf16() {
        // U+1D11E MUSICAL SYMBOL G CLEF: 4 UTF-8 bytes, 2 UTF-16 units.
        let clef = "\u{1D11E}";
        assert_eq!(Utf8Units::view(clef).len(), 4);
        assert_eq!(Utf16Units::view(clef).len(), 2);
        assert_eq!(Scalars::view(clef).len(), 1);
        assert_eq!(Clusters::view(clef).len(), 1);
    }

    #[test]
    fn special_elements_round_trip_through_view() {
        assert_eq!(Utf8Units::view("^*.$"), vec![
            Utf8Units::CARET,
            Utf8Units::ASTERISK,
            Utf8Units::PERIOD,
            Utf8Units::DOLLAR,
        ]);
        assert_eq!(Scalars::view("^*.$"), vec!['^', '*', '.', '$']);
        assert_eq!(Clusters::view("^*.$"), vec!["^", "*", ".", "$"]);
    }

    #[test]
    fn cluster_view_borrows_the_source() {
        let text = String::from("abc");
        let view = Clusters::view(&text);
        assert_eq!(view, vec!["a", "b", "c"]);
    }
}
