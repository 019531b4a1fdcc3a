//! # Text / Character Transform
//!
//! Converts between a text value and the sequence of its characters.
//!
//! - A text value becomes a `Vec<String>` holding one single-character string per
//!   character, in order. `"Nico"` becomes `["N", "i", "c", "o"]`.
//! - A sequence becomes the concatenation of its elements, with no separator.
//!   `["N", "i", "c", "o"]` becomes `"Nico"`.
//!
//! Empty inputs yield empty outputs. Characters are Unicode scalar values, so
//! `"añ"` splits into two elements.
//!
//! ## Picking the Result Type Statically
//!
//! Callers never inspect the result to learn its shape. There are three equivalent
//! entry points:
//!
//! - the two named functions [`text_to_chars`] and [`chars_to_text`];
//! - the [`ParseStr`] trait, whose `Output` follows from the input type;
//! - the tagged [`TextOrChars`] value, for callers that only know the shape at runtime.
//!
//! ```rust
//! use catalog_recipe::transform::{chars_to_text, text_to_chars, ParseStr};
//!
//! let chars: Vec<String> = "Nico".parse_str();
//! assert_eq!(chars, ["N", "i", "c", "o"]);
//!
//! let text: String = chars.parse_str();
//! assert_eq!(text, "Nico");
//!
//! assert_eq!(chars_to_text(&text_to_chars("Nico")), "Nico");
//! ```

use serde::{Deserialize, Serialize};

/// Splits `input` into one string per character, preserving order.
pub fn text_to_chars(input: &str) -> Vec<String> {
    input.chars().map(String::from).collect()
}

/// Joins `input` into a single string with no separator.
pub fn chars_to_text<S: AsRef<str>>(input: &[S]) -> String {
    input.iter().fold(String::new(), |mut text, s| {
        text.push_str(s.as_ref());
        text
    })
}

/// Input-shape-specific signatures over [`text_to_chars`] and [`chars_to_text`].
///
/// Text inputs produce `Vec<String>`; sequence inputs produce `String`.
pub trait ParseStr {
    type Output;

    fn parse_str(self) -> Self::Output;
}

impl ParseStr for &str {
    type Output = Vec<String>;

    fn parse_str(self) -> Vec<String> {
        text_to_chars(self)
    }
}

impl ParseStr for &String {
    type Output = Vec<String>;

    fn parse_str(self) -> Vec<String> {
        text_to_chars(self)
    }
}

impl ParseStr for String {
    type Output = Vec<String>;

    fn parse_str(self) -> Vec<String> {
        text_to_chars(&self)
    }
}

impl<S: AsRef<str>> ParseStr for &[S] {
    type Output = String;

    fn parse_str(self) -> String {
        chars_to_text(self)
    }
}

impl<S: AsRef<str>> ParseStr for &Vec<S> {
    type Output = String;

    fn parse_str(self) -> String {
        chars_to_text(self)
    }
}

impl<S: AsRef<str>> ParseStr for Vec<S> {
    type Output = String;

    fn parse_str(self) -> String {
        chars_to_text(&self)
    }
}

/// A value that is either a text or a sequence of characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrChars {
    Text(String),
    Chars(Vec<String>),
}

impl TextOrChars {
    /// Converts to the other variant.
    pub fn transform(self) -> Self {
        match self {
            TextOrChars::Chars(chars) => TextOrChars::Text(chars_to_text(&chars)),
            TextOrChars::Text(text) => TextOrChars::Chars(text_to_chars(&text)),
        }
    }
}

impl From<&str> for TextOrChars {
    fn from(text: &str) -> Self {
        TextOrChars::Text(text.to_string())
    }
}

impl From<String> for TextOrChars {
    fn from(text: String) -> Self {
        TextOrChars::Text(text)
    }
}

impl From<Vec<String>> for TextOrChars {
    fn from(chars: Vec<String>) -> Self {
        TextOrChars::Chars(chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Nico", &["N", "i", "c", "o"] ; "ascii name")]
    #[test_case("", &[] ; "empty text")]
    #[test_case("a b", &["a", " ", "b"] ; "keeps spaces")]
    #[test_case("añ€", &["a", "ñ", "€"] ; "multibyte characters")]
    fn test_text_to_chars(input: &str, expected: &[&str]) {
        assert_eq!(text_to_chars(input), expected);
    }

    #[test_case(&["N", "i", "c", "o"], "Nico" ; "single characters")]
    #[test_case(&[], "" ; "empty sequence")]
    #[test_case(&["ab", "", "c"], "abc" ; "no separator between elements")]
    fn test_chars_to_text(input: &[&str], expected: &str) {
        assert_eq!(chars_to_text(input), expected);
    }

    #[test]
    fn test_parse_str_output_follows_input() {
        let chars: Vec<String> = "Nico".parse_str();
        assert_eq!(chars, vec!["N", "i", "c", "o"]);

        let text: String = (&chars).parse_str();
        assert_eq!(text, "Nico");

        let owned: Vec<String> = String::from("ok").parse_str();
        assert_eq!(owned, vec!["o", "k"]);

        let from_slice: String = ["x", "y"][..].parse_str();
        assert_eq!(from_slice, "xy");
    }

    #[test]
    fn test_tagged_transform() {
        assert_eq!(
            TextOrChars::from("Nico").transform(),
            TextOrChars::Chars(vec!["N".into(), "i".into(), "c".into(), "o".into()])
        );
        assert_eq!(
            TextOrChars::from(vec!["N".to_string(), "i".to_string()]).transform(),
            TextOrChars::Text("Ni".into())
        );
        assert_eq!(TextOrChars::from("").transform(), TextOrChars::Chars(vec![]));
        assert_eq!(TextOrChars::Chars(vec![]).transform(), TextOrChars::Text(String::new()));
    }

    #[test]
    fn test_untagged_json_shape() {
        let text: TextOrChars = serde_json::from_str(r#""Nico""#).unwrap();
        assert_eq!(text, TextOrChars::Text("Nico".into()));

        let chars: TextOrChars = serde_json::from_str(r#"["N","i"]"#).unwrap();
        assert_eq!(chars.transform(), TextOrChars::Text("Ni".into()));
    }
}
