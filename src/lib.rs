//! Workspace umbrella crate for spanlocate.
//!
//! Re-exports the ordered fragment locator from `locate` and adds file-based
//! configuration so callers can drive the locator from a single YAML file.
//!
//! ```rust
//! use spanlocate::{locate, SpanlocateConfig, Locator};
//!
//! let haystack = "It's amazing how quick he was";
//! let hit = locate(haystack, &["amazing", "quick"], false).unwrap();
//! assert_eq!(hit.matched_text, "amazing how quick");
//!
//! let cfg = SpanlocateConfig::from_yaml("version: \"1.0\"\nlocate:\n  allow_missing_tokens: true\n").unwrap();
//! let locator = Locator::new(cfg.locate_config()).unwrap();
//! assert!(locator.locate(haystack, &["amazing", "zebra"]).is_some());
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, LocateYamlConfig, LoggingYamlConfig, SpanlocateConfig};
pub use locate::{
    explain, locate, locate_with_config, locate_words, set_locate_metrics, split_needle,
    ExplainedPart, LocateConfig, LocateError, LocateMetrics, Locator, MatchExplanation,
    MatchResult, NeedleToken,
};
