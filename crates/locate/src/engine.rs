use std::time::Instant;

use tracing::{debug, warn, Level};

use crate::config::LocateConfig;
use crate::error::LocateError;
use crate::metrics::MetricsSpan;
use crate::needle::{split_needle, Needle};
use crate::path::{Candidate, Path};
use crate::types::{MatchExplanation, MatchResult};


/// Locates the best span for an ordered needle with default settings.
///
/// Empty fragments are ignored. Returns `None` when no usable fragment
/// remains, when the anchor (first non-empty fragment) never occurs, or when
/// every candidate lost a required fragment. With `allow_missing_tokens`,
/// fragments after the anchor that cannot be placed are skipped instead.
///
/// ```rust
/// let haystack = "It's amazing how quick he was";
/// let result = locate::locate(haystack, &["amazing", "how", "quick"], false).unwrap();
/// assert_eq!(result.matched_text, "amazing how quick");
/// assert_eq!(result.start_position, 5);
/// assert!(result.has_gaps);
/// ```
pub fn locate<S: AsRef<str>>(
    haystack: &str,
    tokens: &[S],
    allow_missing_tokens: bool,
) -> Option<MatchResult> {
    let options = SearchOptions {
        allow_missing_tokens,
        max_candidates: None,
        record_gaps: false,
    };
    search(haystack, &Needle::new(tokens), options).result(haystack)
}

/// Validates `cfg`, then locates the best span for `tokens`.
pub fn locate_with_config<S: AsRef<str>>(
    haystack: &str,
    tokens: &[S],
    cfg: &LocateConfig,
) -> Result<Option<MatchResult>, LocateError> {
    Ok(Locator::new(cfg.clone())?.locate(haystack, tokens))
}

/// Validates `cfg`, then locates the best span and reports how it was
/// assembled.
pub fn explain<S: AsRef<str>>(
    haystack: &str,
    tokens: &[S],
    cfg: &LocateConfig,
) -> Result<Option<MatchExplanation>, LocateError> {
    Ok(Locator::new(cfg.clone())?.explain(haystack, tokens))
}

/// Validates `cfg`, then splits `needle_text` into words and locates them.
pub fn locate_words(
    haystack: &str,
    needle_text: &str,
    cfg: &LocateConfig,
) -> Result<Option<MatchResult>, LocateError> {
    Ok(Locator::new(cfg.clone())?.locate_words(haystack, needle_text))
}

/// Locator bound to a validated configuration.
///
/// Holds no state between calls; one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    cfg: LocateConfig,
}

impl Locator {
    /// Construct a locator, rejecting invalid configurations.
    pub fn new(cfg: LocateConfig) -> Result<Self, LocateError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "locate_invalid_config");
            return Err(err);
        }
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &LocateConfig {
        &self.cfg
    }

    /// Locate the best span for an ordered needle.
    pub fn locate<S: AsRef<str>>(&self, haystack: &str, tokens: &[S]) -> Option<MatchResult> {
        search(haystack, &Needle::new(tokens), self.options(false)).result(haystack)
    }

    /// Split copy/paste text into words and locate them in order.
    ///
    /// Separators are not part of the needle, so multi-word matches normally
    /// report gaps.
    pub fn locate_words(&self, haystack: &str, needle_text: &str) -> Option<MatchResult> {
        let words = split_needle(needle_text);
        self.locate(haystack, &words)
    }

    /// Locate the best span and report how it was assembled.
    pub fn explain<S: AsRef<str>>(&self, haystack: &str, tokens: &[S]) -> Option<MatchExplanation> {
        let outcome = search(haystack, &Needle::new(tokens), self.options(true));
        let path = outcome.winner()?;
        Some(MatchExplanation {
            result: path.to_result(haystack),
            parts: path.explained_parts(),
            missing_tokens: path.missing().iter().map(|t| t.to_string()).collect(),
            candidates_seeded: outcome.candidates.len(),
            candidates_invalidated: outcome.invalidated,
        })
    }

    fn options(&self, record_gaps: bool) -> SearchOptions {
        SearchOptions {
            allow_missing_tokens: self.cfg.allow_missing_tokens,
            max_candidates: self.cfg.max_candidates,
            record_gaps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchOptions {
    allow_missing_tokens: bool,
    max_candidates: Option<usize>,
    record_gaps: bool,
}

/// Every candidate of one call, in creation order, plus the winner's slot.
#[derive(Debug)]
struct SearchOutcome<'a> {
    candidates: Vec<Candidate<'a>>,
    winner: Option<usize>,
    invalidated: usize,
}

impl<'a> SearchOutcome<'a> {
    fn winner(&self) -> Option<&Path<'a>> {
        match self.candidates.get(self.winner?) {
            Some(Candidate::Open(path)) => Some(path),
            Some(Candidate::Invalid) | None => None,
        }
    }

    fn result(&self, haystack: &str) -> Option<MatchResult> {
        self.winner().map(|path| path.to_result(haystack))
    }
}

fn search<'a>(
    haystack: &'a str,
    needle: &Needle<'a>,
    options: SearchOptions,
) -> SearchOutcome<'a> {
    let start = Instant::now();
    let metrics = MetricsSpan::start();

    let span = tracing::span!(
        Level::DEBUG,
        "locate.locate",
        tokens = needle.len(),
        haystack_len = haystack.len(),
        allow_missing = options.allow_missing_tokens
    );
    let _guard = span.enter();

    let outcome = match needle.anchor() {
        Some((anchor, rest)) => {
            let mut candidates = seed_candidates(haystack, anchor, options.max_candidates);
            let invalidated = extend_candidates(haystack, rest, &mut candidates, options);
            let winner = select_winner(&candidates);
            SearchOutcome {
                candidates,
                winner,
                invalidated,
            }
        }
        None => SearchOutcome {
            candidates: Vec::new(),
            winner: None,
            invalidated: 0,
        },
    };

    let elapsed_micros = start.elapsed().as_micros();
    match outcome.winner() {
        Some(path) => debug!(
            candidates = outcome.candidates.len(),
            invalidated = outcome.invalidated,
            gap_distance = path.cumulative_gap_distance(),
            elapsed_micros,
            "locate_match"
        ),
        None => debug!(
            candidates = outcome.candidates.len(),
            invalidated = outcome.invalidated,
            elapsed_micros,
            "locate_not_found"
        ),
    }
    if let Some(metrics) = metrics {
        metrics.finish(outcome.candidates.len(), outcome.winner.is_some());
    }

    outcome
}

/// Byte offset of the first occurrence of `token` at or after `from`.
fn find_from(haystack: &str, token: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(token))
        .map(|offset| from + offset)
}

/// One path per non-overlapping anchor occurrence, scanning left to right.
fn seed_candidates<'a>(
    haystack: &'a str,
    anchor: &'a str,
    max_candidates: Option<usize>,
) -> Vec<Candidate<'a>> {
    let limit = max_candidates.unwrap_or(usize::MAX);
    let mut candidates = Vec::new();
    let mut cursor = 0;

    while candidates.len() < limit {
        let Some(start) = find_from(haystack, anchor, cursor) else {
            break;
        };
        candidates.push(Candidate::Open(Path::seed(anchor, start)));
        // Resume past the whole occurrence; overlapping repeats are not seeds.
        cursor = start + anchor.len();
    }

    candidates
}

/// Places each remaining fragment on every open candidate, in needle order.
/// Returns how many candidates became invalid.
fn extend_candidates<'a>(
    haystack: &'a str,
    tokens: &[&'a str],
    candidates: &mut [Candidate<'a>],
    options: SearchOptions,
) -> usize {
    let mut invalidated = 0;

    for &token in tokens {
        for candidate in candidates.iter_mut() {
            let Candidate::Open(path) = candidate else {
                continue;
            };
            match find_from(haystack, token, path.end()) {
                Some(start) => path.extend(haystack, token, start, options.record_gaps),
                None if options.allow_missing_tokens => path.skip(token),
                None => {
                    *candidate = Candidate::Invalid;
                    invalidated += 1;
                }
            }
        }
    }

    invalidated
}

/// Smallest cumulative gap distance wins; the earliest candidate keeps ties.
fn select_winner(candidates: &[Candidate<'_>]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for (idx, candidate) in candidates.iter().enumerate() {
        let Candidate::Open(path) = candidate else {
            continue;
        };
        let distance = path.cumulative_gap_distance();
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }

    best.map(|(idx, _)| idx)
}
