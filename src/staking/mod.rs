//! Staking helpers.
//!
//! # Data Flow
//! ```text
//! compound_rewards(validator, poll)
//!     → bank_balance (initial)
//!     → broadcast withdraw-delegator-rewards
//!     → wait_for_balance_update (fixed-interval poll, attempt budget)
//!     → delta branching (negative / zero / positive)
//!     → broadcast delegate (positive delta only)
//!     → CompoundOutcome
//! ```
//!
//! # Design Decisions
//! - Business outcomes (bad address, timeout, no rewards) are values;
//!   infrastructure failures stay hard errors
//! - The poll budget is attempt-count based, not a wall-clock deadline

pub mod compounder;
pub mod types;

pub use compounder::RewardCompounder;
pub use types::{CompoundOutcome, PollConfig, StakingError};
