use serde::{Deserialize, Serialize};

/// The contiguous haystack span reconstructed from an ordered needle.
///
/// `matched_text` always equals `haystack[start_position..end_position]`,
/// including any haystack text that lies between the placed fragments.
/// Offsets are UTF-8 byte offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub matched_text: String,
    /// Byte offset (inclusive) of the first placed fragment.
    pub start_position: usize,
    /// Byte offset (exclusive) of the last placed fragment.
    pub end_position: usize,
    /// Whether the most recently placed fragment was separated from the one
    /// before it. Earlier gaps do not affect this flag; see `any_gaps`.
    pub has_gaps: bool,
    /// Whether any two consecutively placed fragments were separated.
    #[serde(default)]
    pub any_gaps: bool,
    /// Whether some fragment was skipped because it could not be placed.
    #[serde(default)]
    pub has_missing_parts: bool,
    /// Sum of the gap lengths along the winning path.
    #[serde(default)]
    pub gap_distance: usize,
}

/// A placed fragment of the winning path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplainedPart {
    pub token: String,
    pub start: usize,
    pub end: usize,
    /// Haystack text between the previous part and this one. `None` for the
    /// anchor.
    pub gap_text: Option<String>,
    pub gap_len: Option<usize>,
}

/// The winning match plus the bookkeeping that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchExplanation {
    pub result: MatchResult,
    pub parts: Vec<ExplainedPart>,
    /// Fragments skipped along the winning path, in needle order.
    pub missing_tokens: Vec<String>,
    /// Number of anchor occurrences that seeded a candidate.
    pub candidates_seeded: usize,
    /// Number of candidates dropped because a required fragment was absent.
    pub candidates_invalidated: usize,
}
