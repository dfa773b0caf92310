//! Injective staking helpers.
//!
//! Thin wrappers around an injected chain-client capability: delegating
//! tokens, compounding staking rewards (withdraw, wait for the bank balance
//! to move, restake the delta), and fetching the token-station snapshot feed.
//!
//! # Data Flow
//! ```text
//! ChainClient capability (external SDK or test double)
//!     → staking::RewardCompounder (withdraw → poll balance → restake)
//!     → CompoundOutcome (success with both tx receipts, or business failure)
//!
//! snapshot::SnapshotClient → one best-effort GET → Vec<JSON object>
//! ```

pub mod chain;
pub mod config;
pub mod observability;
pub mod snapshot;
pub mod staking;

pub use chain::{
    AccountAddress, Balance, ChainClient, ChainError, StakeMsg, TxResponse, ValidatorAddress,
};
pub use config::StakingConfig;
pub use snapshot::SnapshotClient;
pub use staking::{CompoundOutcome, PollConfig, RewardCompounder, StakingError};
