//! Staking outcome, poll configuration, and error definitions.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::chain::types::{ChainError, InvalidValidatorAddress, TxResponse};

/// Polling parameters for the balance-update wait.
///
/// The attempt budget is `timeout_secs / interval_secs` (integer division),
/// so a timeout smaller than the interval yields zero attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Total nominal wait in seconds.
    pub timeout_secs: u64,
    /// Seconds between balance checks. Must be greater than zero.
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            interval_secs: 1,
        }
    }
}

impl PollConfig {
    /// Number of balance checks this configuration budgets for.
    pub fn attempts(&self) -> u64 {
        if self.interval_secs == 0 {
            return 0;
        }
        self.timeout_secs / self.interval_secs
    }
}

/// Outcome of a compounding run. Never partially populated: success always
/// carries both receipts, failure only the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundOutcome {
    Success {
        withdraw_response: TxResponse,
        delegate_response: TxResponse,
    },
    Failure {
        reason: String,
    },
}

impl CompoundOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }
}

// Serialized as `{"success": true, "withdraw_response": .., "delegate_response": ..}`
// or `{"success": false, "error": ..}`, the shape callers of the original
// wrappers consume.
impl Serialize for CompoundOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                withdraw_response,
                delegate_response,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("withdraw_response", withdraw_response)?;
                map.serialize_entry("delegate_response", delegate_response)?;
                map.end()
            }
            Self::Failure { reason } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", reason)?;
                map.end()
            }
        }
    }
}

/// Errors raised by the staking helpers.
#[derive(Debug, Error)]
pub enum StakingError {
    /// Validator address failed the prefix check. Recovered into a
    /// [`CompoundOutcome::Failure`] inside `compound_rewards`.
    #[error(transparent)]
    InvalidAddressFormat(#[from] InvalidValidatorAddress),

    /// Balance did not move within the attempt budget. Recovered into a
    /// [`CompoundOutcome::Failure`] inside `compound_rewards`.
    #[error("balance did not update within the timeout period ({attempts} attempts)")]
    BalanceUpdateTimeout { attempts: u64 },

    /// Non-positive poll interval. A precondition violation, always hard.
    #[error("poll interval must be greater than zero")]
    InvalidInterval,

    /// Infrastructure failure from the chain client; never recovered here.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
