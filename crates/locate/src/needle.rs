use serde::{Deserialize, Serialize};

/// A word taken from needle text, with UTF-8 byte offsets into that text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NeedleToken {
    /// The word content.
    pub text: String,
    /// Byte offset (inclusive) in the needle text.
    pub start: usize,
    /// Byte offset (exclusive) in the needle text.
    pub end: usize,
}

impl AsRef<str> for NeedleToken {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits copy/paste needle text into ordered words.
///
/// Words are separated by Unicode whitespace; the separators themselves are
/// dropped, so locating the words afterwards will see them as gaps.
pub fn split_needle(text: &str) -> Vec<NeedleToken> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(NeedleToken {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(NeedleToken {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}

/// Ordered, non-empty needle fragments for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Needle<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Needle<'a> {
    /// Drops empty fragments, keeping the relative order of the rest.
    pub(crate) fn new<S: AsRef<str>>(raw: &'a [S]) -> Self {
        let tokens = raw
            .iter()
            .map(|token| -> &'a str { token.as_ref() })
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Splits off the anchor fragment from the fragments that extend it.
    ///
    /// Returns `None` when no usable fragment exists.
    pub(crate) fn anchor(&self) -> Option<(&'a str, &[&'a str])> {
        self.tokens.split_first().map(|(anchor, rest)| (*anchor, rest))
    }
}
