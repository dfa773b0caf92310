//! Reward compounding: withdraw, wait for the balance delta, restake.
//!
//! # Responsibilities
//! - Orchestrate withdraw-then-restake for one validator
//! - Poll the bank balance at a fixed interval with a bounded attempt budget
//! - Branch on the observed delta (negative, zero, positive)
//!
//! All chain interaction goes through the injected [`ChainClient`]; the only
//! logic here is the poll loop and the delta arithmetic.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::time::sleep;

use crate::chain::client::ChainClient;
use crate::chain::types::{TxResponse, ValidatorAddress};
use crate::staking::types::{CompoundOutcome, PollConfig, StakingError};

/// Smallest units per display unit of the native token (18 decimals).
const NATIVE_SCALE: Decimal = dec!(1_000_000_000_000_000_000);

/// Default staking denomination.
pub const DEFAULT_STAKING_DENOM: &str = "inj";

/// Compounds staking rewards for one validator through an injected client.
///
/// Stateless across calls; each invocation works on its own locals.
pub struct RewardCompounder<C> {
    client: C,
    denom: String,
}

impl<C: ChainClient> RewardCompounder<C> {
    /// Create a compounder staking the default denomination.
    pub fn new(client: C) -> Self {
        Self::with_denom(client, DEFAULT_STAKING_DENOM)
    }

    /// Create a compounder staking a specific denomination.
    pub fn with_denom(client: C, denom: impl Into<String>) -> Self {
        Self {
            client,
            denom: denom.into(),
        }
    }

    /// The denomination this compounder stakes.
    pub fn denom(&self) -> &str {
        &self.denom
    }

    /// Delegate `amount` display units to `validator`.
    pub async fn stake_tokens(
        &self,
        validator: &ValidatorAddress,
        amount: Decimal,
    ) -> Result<TxResponse, StakingError> {
        let delegator = self.client.address().clone();
        let msg = self.client.delegate_msg(&delegator, validator, amount);
        let response = self.client.broadcast(msg).await?;

        tracing::info!(
            txhash = %response.txhash,
            validator = %validator,
            %amount,
            "delegation broadcast"
        );
        Ok(response)
    }

    /// Withdraw accrued rewards from `validator` and restake the delta.
    ///
    /// Business outcomes (malformed address, balance-update timeout, zero or
    /// negative net reward) come back as [`CompoundOutcome::Failure`].
    /// Precondition violations and chain failures are `Err`.
    pub async fn compound_rewards(
        &self,
        validator_address: &str,
        poll: PollConfig,
    ) -> Result<CompoundOutcome, StakingError> {
        let validator: ValidatorAddress = match validator_address.parse() {
            Ok(validator) => validator,
            Err(err) => {
                tracing::warn!(address = validator_address, "rejecting malformed validator address");
                return Ok(CompoundOutcome::failure(err.to_string()));
            }
        };

        let delegator = self.client.address().clone();
        let initial_balance = self
            .client
            .bank_balance(&delegator, &self.denom)
            .await?
            .amount;
        tracing::debug!(
            balance = %initial_balance,
            denom = %self.denom,
            "captured pre-withdraw balance"
        );

        let withdraw_msg = self.client.withdraw_rewards_msg(&delegator, &validator);
        let withdraw_response = self.client.broadcast(withdraw_msg).await?;
        tracing::info!(
            txhash = %withdraw_response.txhash,
            validator = %validator,
            "reward withdrawal broadcast"
        );

        let updated_balance = match self
            .wait_for_balance_update(initial_balance, &self.denom, poll)
            .await
        {
            Ok(balance) => balance,
            Err(err @ StakingError::BalanceUpdateTimeout { .. }) => {
                return Ok(CompoundOutcome::failure(err.to_string()));
            }
            Err(err) => return Err(err),
        };

        let rewards_to_stake = updated_balance - initial_balance;
        if let Some(reason) = reject_reward_delta(rewards_to_stake) {
            tracing::info!(delta = %rewards_to_stake, "nothing to restake");
            return Ok(CompoundOutcome::failure(reason));
        }

        let amount = rewards_to_stake / NATIVE_SCALE;
        let delegate_msg = self.client.delegate_msg(&delegator, &validator, amount);
        let delegate_response = self.client.broadcast(delegate_msg).await?;
        tracing::info!(
            txhash = %delegate_response.txhash,
            validator = %validator,
            %amount,
            "rewards restaked"
        );

        Ok(CompoundOutcome::Success {
            withdraw_response,
            delegate_response,
        })
    }

    /// Poll the bank balance until it differs from `old_balance`.
    ///
    /// Checks at most `timeout_secs / interval_secs` times, sleeping
    /// `interval_secs` between checks; suspension happens only at the sleep
    /// point. Returns the first balance observed to differ, in either
    /// direction. The budget counts attempts, not elapsed time, so slow
    /// queries can stretch the real wait past the nominal timeout.
    pub async fn wait_for_balance_update(
        &self,
        old_balance: Decimal,
        denom: &str,
        poll: PollConfig,
    ) -> Result<Decimal, StakingError> {
        if poll.interval_secs == 0 {
            return Err(StakingError::InvalidInterval);
        }

        let attempts = poll.attempts();
        let interval = Duration::from_secs(poll.interval_secs);
        let address = self.client.address().clone();

        for attempt in 0..attempts {
            let balance = self.client.bank_balance(&address, denom).await?;
            if balance.amount != old_balance {
                tracing::debug!(
                    attempt,
                    old = %old_balance,
                    new = %balance.amount,
                    "balance updated"
                );
                return Ok(balance.amount);
            }
            tracing::debug!(attempt, balance = %old_balance, "balance unchanged");
            sleep(interval).await;
        }

        Err(StakingError::BalanceUpdateTimeout { attempts })
    }

    /// The injected chain client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Reject non-positive reward deltas with the reason callers surface.
fn reject_reward_delta(rewards_to_stake: Decimal) -> Option<String> {
    if rewards_to_stake < Decimal::ZERO {
        return Some(format!(
            "rewards ({rewards_to_stake}) are lower than gas fees, resulting in a negative net reward"
        ));
    }
    if rewards_to_stake.is_zero() {
        return Some("no rewards available to compound".to_string());
    }
    None
}
