//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (poll interval > 0, interval within timeout)
//! - Check the snapshot URL parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: StakingConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::StakingConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("staking denom must not be empty")]
    EmptyDenom,

    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("poll interval ({interval_secs}s) exceeds poll timeout ({timeout_secs}s)")]
    IntervalExceedsTimeout { interval_secs: u64, timeout_secs: u64 },

    #[error("invalid snapshot url '{url}': {reason}")]
    InvalidSnapshotUrl { url: String, reason: String },
}

/// Run all semantic checks, collecting every failure.
pub fn validate_config(config: &StakingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.denom.0.is_empty() {
        errors.push(ValidationError::EmptyDenom);
    }

    if config.poll.interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    } else if config.poll.interval_secs > config.poll.timeout_secs {
        errors.push(ValidationError::IntervalExceedsTimeout {
            interval_secs: config.poll.interval_secs,
            timeout_secs: config.poll.timeout_secs,
        });
    }

    if let Err(err) = Url::parse(&config.snapshot.url) {
        errors.push(ValidationError::InvalidSnapshotUrl {
            url: config.snapshot.url.clone(),
            reason: err.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
