//! Ordered fragment locator.
//!
//! Given a haystack and an ordered list of needle fragments, this crate finds
//! the single contiguous span of the haystack that most plausibly holds those
//! fragments in order. Fragments may be separated by arbitrary haystack text
//! ("gaps") and, when allowed, fragments after the first may be missing.
//!
//! ## How a span is chosen
//!
//! - Every non-overlapping occurrence of the first non-empty fragment (the
//!   anchor) starts a candidate.
//! - Each following fragment is searched forward from the end of the
//!   candidate's last placed fragment. A fragment that is not found either
//!   invalidates the candidate or, with `allow_missing_tokens`, is skipped.
//! - The surviving candidate with the smallest total gap length wins; the
//!   earliest anchor wins ties.
//!
//! The returned [`MatchResult`] spans from the first placed fragment to the
//! last one, including the haystack text between them.
//!
//! ## Pure function guarantee
//!
//! No I/O and no state between calls. Same haystack and fragments, same
//! result. Offsets are UTF-8 byte offsets and always fall on char boundaries.
//!
//! ## Example
//!
//! ```rust
//! use locate::{locate, Locator, LocateConfig};
//!
//! let haystack = "It's amazing how quick he was";
//! let result = locate(haystack, &["amazing ", "how ", "quick"], false).unwrap();
//! assert_eq!(result.matched_text, "amazing how quick");
//! assert!(!result.has_gaps);
//!
//! let locator = Locator::new(LocateConfig { allow_missing_tokens: true, ..Default::default() }).unwrap();
//! let result = locator.locate(haystack, &["amazing", "zebra", "quick"]).unwrap();
//! assert!(result.has_missing_parts);
//! ```
//!
//! ## Observability
//!
//! Every call emits `tracing` debug events. Install a [`LocateMetrics`]
//! implementation via [`set_locate_metrics`] to record latency and candidate
//! counts.

mod config;
mod engine;
mod error;
mod metrics;
mod needle;
mod path;
mod types;

pub use crate::config::LocateConfig;
pub use crate::engine::{explain, locate, locate_with_config, locate_words, Locator};
pub use crate::error::LocateError;
pub use crate::metrics::{set_locate_metrics, LocateMetrics};
pub use crate::needle::{split_needle, NeedleToken};
pub use crate::types::{ExplainedPart, MatchExplanation, MatchResult};
