//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::snapshot::{DEFAULT_SNAPSHOT_TIMEOUT_SECS, DEFAULT_SNAPSHOT_URL};
use crate::staking::compounder::DEFAULT_STAKING_DENOM;
use crate::staking::types::PollConfig;

/// Root configuration for the staking helpers.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StakingConfig {
    /// Denomination staked and watched for reward deltas.
    pub denom: StakingDenom,

    /// Balance-polling defaults for `compound_rewards`.
    pub poll: PollConfig,

    /// Snapshot endpoint settings.
    pub snapshot: SnapshotConfig,
}

/// Staking denomination wrapper so the default is `"inj"` rather than `""`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StakingDenom(pub String);

impl Default for StakingDenom {
    fn default() -> Self {
        Self(DEFAULT_STAKING_DENOM.to_string())
    }
}

/// Snapshot endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Endpoint URL returning the latest snapshot list.
    pub url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SNAPSHOT_URL.to_string(),
            request_timeout_secs: DEFAULT_SNAPSHOT_TIMEOUT_SECS,
        }
    }
}
