//! The chain-client trait.
//!
//! # Responsibilities
//! - Define the seam between this crate and the external SDK
//! - Compose staking messages for the delegator/validator pair
//! - Leave signing, gas handling, and broadcast entirely to implementors
//!
//! Implementations wrap a real node connection; tests substitute a scripted
//! double that simulates balance changes across polling iterations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::chain::types::{
    AccountAddress, Balance, ChainResult, StakeMsg, TxResponse, ValidatorAddress,
};

/// Capability the staking helpers are generic over.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// The account address transactions are signed with.
    fn address(&self) -> &AccountAddress;

    /// Query the bank balance of `address` for one denomination.
    async fn bank_balance(&self, address: &AccountAddress, denom: &str) -> ChainResult<Balance>;

    /// Compose a withdraw-delegator-rewards message.
    ///
    /// The default builds the message inline; SDK-backed clients may
    /// override to attach chain metadata through their composer.
    fn withdraw_rewards_msg(
        &self,
        delegator: &AccountAddress,
        validator: &ValidatorAddress,
    ) -> StakeMsg {
        StakeMsg::WithdrawDelegatorReward {
            delegator_address: delegator.clone(),
            validator_address: validator.clone(),
        }
    }

    /// Compose a delegate message for `amount` display units.
    fn delegate_msg(
        &self,
        delegator: &AccountAddress,
        validator: &ValidatorAddress,
        amount: Decimal,
    ) -> StakeMsg {
        StakeMsg::Delegate {
            delegator_address: delegator.clone(),
            validator_address: validator.clone(),
            amount,
        }
    }

    /// Build, sign, and broadcast a transaction carrying `msg`.
    async fn broadcast(&self, msg: StakeMsg) -> ChainResult<TxResponse>;
}
