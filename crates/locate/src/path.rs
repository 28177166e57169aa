//! Search hypotheses.
//!
//! A [`Path`] places needle fragments, in order, at concrete haystack
//! offsets. Candidates live in an arena indexed by creation order; a
//! candidate whose required fragment could not be placed is replaced by
//! [`Candidate::Invalid`] and never touched again.

use crate::types::{ExplainedPart, MatchResult};

/// Literal haystack text between a part and the part placed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gap<'a> {
    pub(crate) text: &'a str,
}

/// One placed fragment occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathPart<'a> {
    pub(crate) token: &'a str,
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Only recorded when the caller asked for an explanation.
    pub(crate) gap: Option<Gap<'a>>,
}

/// One hypothesis for the whole needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Path<'a> {
    parts: Vec<PathPart<'a>>,
    missing: Vec<&'a str>,
    cumulative_gap_distance: usize,
    has_gaps: bool,
    any_gaps: bool,
}

/// Arena slot for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate<'a> {
    Open(Path<'a>),
    Invalid,
}

impl<'a> Path<'a> {
    /// Starts a path at one occurrence of the anchor fragment.
    pub(crate) fn seed(anchor: &'a str, start: usize) -> Self {
        Self {
            parts: vec![PathPart {
                token: anchor,
                start,
                end: start + anchor.len(),
                gap: None,
            }],
            missing: Vec::new(),
            cumulative_gap_distance: 0,
            has_gaps: false,
            any_gaps: false,
        }
    }

    /// End offset of the last placed fragment; the next search starts here.
    pub(crate) fn end(&self) -> usize {
        match self.parts.last() {
            Some(part) => part.end,
            None => unreachable!("path has no parts; every path is seeded with its anchor"),
        }
    }

    pub(crate) fn start(&self) -> usize {
        match self.parts.first() {
            Some(part) => part.start,
            None => unreachable!("path has no parts; every path is seeded with its anchor"),
        }
    }

    pub(crate) fn cumulative_gap_distance(&self) -> usize {
        self.cumulative_gap_distance
    }

    /// Places `token` at `start`, which must not precede the current end.
    pub(crate) fn extend(
        &mut self,
        haystack: &'a str,
        token: &'a str,
        start: usize,
        record_gap: bool,
    ) {
        let prev_end = self.end();
        assert!(
            start >= prev_end,
            "fragment placed at {start} before previous end {prev_end}"
        );

        let gap_len = start - prev_end;
        self.cumulative_gap_distance += gap_len;
        // Tracks the most recent placement only; `any_gaps` keeps the union.
        self.has_gaps = gap_len > 0;
        self.any_gaps |= gap_len > 0;

        let gap = record_gap.then(|| Gap {
            text: &haystack[prev_end..start],
        });
        self.parts.push(PathPart {
            token,
            start,
            end: start + token.len(),
            gap,
        });
    }

    /// Records a fragment that could not be placed. The end stays where it
    /// was, so the following fragment searches from the same position.
    pub(crate) fn skip(&mut self, token: &'a str) {
        self.missing.push(token);
    }

    #[cfg(test)]
    pub(crate) fn parts(&self) -> &[PathPart<'a>] {
        &self.parts
    }

    pub(crate) fn missing(&self) -> &[&'a str] {
        &self.missing
    }

    /// Assembles the span from the first part's start to the last part's end.
    pub(crate) fn to_result(&self, haystack: &str) -> MatchResult {
        let start_position = self.start();
        let end_position = self.end();
        MatchResult {
            matched_text: haystack[start_position..end_position].to_string(),
            start_position,
            end_position,
            has_gaps: self.has_gaps,
            any_gaps: self.any_gaps,
            has_missing_parts: !self.missing.is_empty(),
            gap_distance: self.cumulative_gap_distance,
        }
    }

    pub(crate) fn explained_parts(&self) -> Vec<ExplainedPart> {
        self.parts
            .iter()
            .map(|part| ExplainedPart {
                token: part.token.to_string(),
                start: part.start,
                end: part.end,
                gap_text: part.gap.map(|gap| gap.text.to_string()),
                gap_len: part.gap.map(|gap| gap.text.len()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAYSTACK: &str = "one two  three";

    #[test]
    fn seed_has_single_part_and_no_gaps() {
        let path = Path::seed("two", 4);
        assert_eq!(path.parts().len(), 1);
        assert_eq!(path.start(), 4);
        assert_eq!(path.end(), 7);
        assert_eq!(path.cumulative_gap_distance(), 0);
        let result = path.to_result(HAYSTACK);
        assert_eq!(result.matched_text, "two");
        assert!(!result.has_gaps);
    }

    #[test]
    fn extend_accumulates_gaps_and_records_gap_text() {
        let mut path = Path::seed("one", 0);
        path.extend(HAYSTACK, "two", 4, true);
        path.extend(HAYSTACK, "three", 9, true);

        assert_eq!(path.cumulative_gap_distance(), 3);
        let parts = path.parts();
        assert_eq!(parts[1].gap, Some(Gap { text: " " }));
        assert_eq!(parts[2].gap, Some(Gap { text: "  " }));

        let result = path.to_result(HAYSTACK);
        assert_eq!(result.matched_text, HAYSTACK);
        assert!(result.has_gaps);
        assert!(result.any_gaps);
    }

    #[test]
    fn has_gaps_follows_last_placement() {
        let haystack = "ab c";
        let mut path = Path::seed("a", 0);
        path.extend(haystack, "b", 1, false);
        assert!(!path.to_result(haystack).has_gaps);
        path.extend(haystack, "c", 3, false);
        assert!(path.to_result(haystack).has_gaps);

        let haystack = "a bc";
        let mut path = Path::seed("a", 0);
        path.extend(haystack, "b", 2, false);
        path.extend(haystack, "c", 3, false);
        let result = path.to_result(haystack);
        assert!(!result.has_gaps);
        assert!(result.any_gaps);
    }

    #[test]
    fn skip_keeps_end() {
        let mut path = Path::seed("one", 0);
        path.skip("zero");
        assert_eq!(path.end(), 3);
        assert_eq!(path.missing(), &["zero"]);
        assert!(path.to_result(HAYSTACK).has_missing_parts);
    }

    #[test]
    fn gap_text_not_recorded_without_request() {
        let mut path = Path::seed("one", 0);
        path.extend(HAYSTACK, "two", 4, false);
        assert_eq!(path.parts()[1].gap, None);
        let explained = path.explained_parts();
        assert_eq!(explained[1].gap_len, None);
    }

    #[test]
    #[should_panic(expected = "before previous end")]
    fn extending_backwards_panics() {
        let mut path = Path::seed("two", 4);
        path.extend(HAYSTACK, "one", 0, false);
    }
}
