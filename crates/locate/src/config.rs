//! Configuration types for the locator.
//!
//! [`LocateConfig`] controls how strictly the ordered needle fragments must
//! be present in the haystack and how much of the haystack is considered as
//! starting points for a match.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use locate::LocateConfig;
//!
//! let config = LocateConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(!config.allow_missing_tokens);
//! assert_eq!(config.max_candidates, None);
//! ```
//!
//! ## Tolerating Missing Fragments
//!
//! ```rust
//! use locate::LocateConfig;
//!
//! let config = LocateConfig {
//!     allow_missing_tokens: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LocateError;

/// Configuration for a single locate call.
///
/// `LocateConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configuration files.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "allow_missing_tokens": false,
///   "max_candidates": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocateConfig {
    /// Version of the locate semantics. Must be >= 1; version 0 is reserved.
    #[serde(default = "LocateConfig::default_version")]
    pub version: u32,

    /// If true, fragments after the anchor that cannot be placed are skipped
    /// instead of invalidating the candidate.
    ///
    /// The anchor (first non-empty fragment) is never skippable: if it does
    /// not occur, the result is always `None`.
    ///
    /// # Default
    ///
    /// `false`
    #[serde(default)]
    pub allow_missing_tokens: bool,

    /// Upper bound on the number of anchor occurrences used as candidates.
    ///
    /// Occurrences are taken left to right, so a bound keeps the earliest
    /// ones. `None` considers every occurrence. `Some(0)` is rejected.
    #[serde(default)]
    pub max_candidates: Option<usize>,
}

impl LocateConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    /// Validate the configuration before a search.
    pub fn validate(&self) -> Result<(), LocateError> {
        if self.version == 0 {
            return Err(LocateError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(LocateError::InvalidConfig(
                "max_candidates must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            allow_missing_tokens: false,
            max_candidates: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(LocateConfig::default().validate().is_ok());
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = LocateConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(LocateError::InvalidConfig(_))));
    }

    #[test]
    fn zero_candidate_bound_rejected() {
        let cfg = LocateConfig {
            max_candidates: Some(0),
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("max_candidates"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: LocateConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, LocateConfig::default());
    }
}
