//! Chain-client capability.
//!
//! # Data Flow
//! ```text
//! External SDK (signing, broadcasting, address encoding)
//!     → implements the ChainClient trait (client.rs)
//!     → types.rs (addresses, balances, messages, tx receipts)
//!     → consumed by staking::RewardCompounder
//! ```
//!
//! # Design Decisions
//! - Everything hard (composition, signing, broadcast) lives behind the
//!   trait; this crate only composes messages and interprets results
//! - Balance amounts are exact decimals, never floats
//! - Addresses stay opaque bech32 strings; only the validator-operator
//!   prefix is enforced here

pub mod client;
pub mod types;

pub use client::ChainClient;
pub use types::{
    AccountAddress, Balance, ChainError, ChainResult, InvalidValidatorAddress, StakeMsg,
    TxResponse, ValidatorAddress, VALIDATOR_ADDRESS_PREFIX,
};
