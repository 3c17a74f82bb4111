//! Word segmentation for compact identifiers
//!
//! Every character falls into one of four classes by Unicode general category:
//! lowercase letter (`Ll`), uppercase letter (`Lu`), decimal digit (`Nd`), or
//! anything else. A new fragment starts wherever the class
//! changes. One repair pass then hands the last letter of an uppercase run to a
//! following lowercase run, so `PDFLoader` splits as `PDF` / `Loader` rather
//! than `PDFL` / `oader`.
//!
//! ```
//! use alpaca_form_schema::segment::{humanize, split};
//!
//! assert_eq!(split("SimpleXMLParser"), vec!["Simple", "XML", "Parser"]);
//! assert_eq!(split("GL11Version"), vec!["GL", "11", "Version"]);
//! assert_eq!(humanize("FirstName"), "First Name");
//! ```

use itertools::Itertools;
use unicode_general_category::GeneralCategory;
use unicode_general_category::get_general_category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl SegmentClass {
    fn of(c: char) -> Self {
        match get_general_category(c) {
            GeneralCategory::LowercaseLetter => Self::Lower,
            GeneralCategory::UppercaseLetter => Self::Upper,
            GeneralCategory::DecimalNumber => Self::Digit,
            _ => Self::Other,
        }
    }
}

/// Split `src` into word fragments.
///
/// Fragments borrow from `src` and concatenate back to it exactly. The empty
/// string yields a single empty fragment.
#[must_use]
pub fn split(src: &str) -> Vec<&str> {
    if src.is_empty() {
        return vec![src];
    }

    // Byte offset of every fragment start, closed by the end of the input.
    let mut bounds = Vec::new();
    let mut last_class = None;
    for (offset, c) in src.char_indices() {
        let class = SegmentClass::of(c);
        if last_class != Some(class) {
            bounds.push(offset);
        }
        last_class = Some(class);
    }
    bounds.push(src.len());

    // "PDFL", "oader" -> "PDF", "Loader"
    for i in 0..bounds.len().saturating_sub(2) {
        let current = &src[bounds[i]..bounds[i + 1]];
        let next = &src[bounds[i + 1]..bounds[i + 2]];
        if starts_with(current, SegmentClass::Upper) && starts_with(next, SegmentClass::Lower) {
            if let Some(last) = current.chars().next_back() {
                bounds[i + 1] -= last.len_utf8();
            }
        }
    }

    bounds
        .iter()
        .tuple_windows()
        .map(|(start, end)| &src[*start..*end])
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Split raw bytes into word fragments.
///
/// Input that is not valid UTF-8 is returned whole as a single fragment.
#[must_use]
pub fn split_bytes(src: &[u8]) -> Vec<&[u8]> {
    match std::str::from_utf8(src) {
        Ok(text) => split(text).into_iter().map(str::as_bytes).collect(),
        Err(_) => vec![src],
    }
}

/// Turn an identifier into a display title by joining its fragments with single spaces.
#[must_use]
pub fn humanize(name: &str) -> String { split(name).into_iter().join(" ") }

fn starts_with(fragment: &str, class: SegmentClass) -> bool {
    fragment
        .chars()
        .next()
        .is_some_and(|c| SegmentClass::of(c) == class)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_split_known_cases() {
        let cases: &[(&str, &[&str])] = &[
            ("", &[""]),
            ("lowercase", &["lowercase"]),
            ("Class", &["Class"]),
            ("MyClass", &["My", "Class"]),
            ("MyC", &["My", "C"]),
            ("HTML", &["HTML"]),
            ("PDFLoader", &["PDF", "Loader"]),
            ("AString", &["A", "String"]),
            ("SimpleXMLParser", &["Simple", "XML", "Parser"]),
            ("vimRPCPlugin", &["vim", "RPC", "Plugin"]),
            ("GL11Version", &["GL", "11", "Version"]),
            ("99Bottles", &["99", "Bottles"]),
            ("May5", &["May", "5"]),
            ("BFG9000", &["BFG", "9000"]),
            ("Two  spaces", &["Two", "  ", "spaces"]),
        ];

        for (input, expected) in cases {
            assert_eq!(split(input), *expected, "splitting {input:?}");
        }
    }

    #[test]
    fn test_split_non_ascii_letters() {
        assert_eq!(split("BöseÜberraschung"), vec!["Böse", "Überraschung"]);
        assert_eq!(split("ÉtéChaud"), vec!["Été", "Chaud"]);
        assert_eq!(split("日本Go"), vec!["日本", "Go"]);
    }

    #[test]
    fn test_split_only_letters_and_decimal_digits_group() {
        assert_eq!(split("1²"), vec!["1", "²"]);
        assert_eq!(split("Aª"), vec!["A", "ª"]);
        assert_eq!(split("x½"), vec!["x", "½"]);
        assert_eq!(split("ChapterⅫ"), vec!["Chapter", "Ⅻ"]);
        assert_eq!(split("ⓐb"), vec!["ⓐ", "b"]);
        assert_eq!(split("Track٣"), vec!["Track", "٣"]);
    }

    #[test]
    fn test_split_snake_case_keeps_separators() {
        assert_eq!(split("first_name"), vec!["first", "_", "name"]);
    }

    #[test]
    fn test_split_bytes_malformed_input_is_not_split() {
        let malformed: &[u8] = b"BadUTF8\xe2\xe2\xa1";
        assert_eq!(split_bytes(malformed), vec![malformed]);
    }

    #[test]
    fn test_split_bytes_valid_input_matches_split() {
        let expected: Vec<&[u8]> = vec![&b"PDF"[..], &b"Loader"[..]];
        assert_eq!(split_bytes(b"PDFLoader"), expected);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("FirstName"), "First Name");
        assert_eq!(humanize("Status"), "Status");
        assert_eq!(humanize("ZIPCode"), "ZIP Code");
        assert_eq!(humanize(""), "");
    }

    proptest! {
        #[test]
        fn fragments_reconstruct_input(input in any::<String>()) {
            prop_assert_eq!(split(&input).concat(), input);
        }

        #[test]
        fn split_is_deterministic(input in "\\PC*") {
            prop_assert_eq!(split(&input), split(&input));
        }

        #[test]
        fn only_empty_input_yields_empty_fragment(input in "\\PC+") {
            prop_assert!(split(&input).iter().all(|fragment| !fragment.is_empty()));
        }

        #[test]
        fn byte_fragments_reconstruct_input(input in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(split_bytes(&input).concat(), input);
        }
    }
}
