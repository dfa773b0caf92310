//! Chain-facing types and error definitions.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bech32 prefix of validator operator addresses on Injective.
pub const VALIDATOR_ADDRESS_PREFIX: &str = "injvaloper";

/// Bech32 account address (`inj...`).
///
/// Owned and encoded by the chain client; this crate never derives or
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validator operator address with the `injvaloper` prefix enforced at parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorAddress(String);

impl ValidatorAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ValidatorAddress {
    type Err = InvalidValidatorAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(VALIDATOR_ADDRESS_PREFIX) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidValidatorAddress(s.to_string()))
        }
    }
}

impl fmt::Display for ValidatorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address failed the validator-operator prefix check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid validator address format: '{0}' does not start with '{VALIDATOR_ADDRESS_PREFIX}'")]
pub struct InvalidValidatorAddress(pub String);

/// A bank balance for one denomination, in the chain's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub denom: String,
    pub amount: Decimal,
}

impl Balance {
    pub fn new(denom: impl Into<String>, amount: Decimal) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Staking messages this crate composes through the chain client.
///
/// Delegate amounts are in display units (INJ, not wei); the client's
/// composer applies on-chain scaling when it builds the real message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StakeMsg {
    WithdrawDelegatorReward {
        delegator_address: AccountAddress,
        validator_address: ValidatorAddress,
    },
    Delegate {
        delegator_address: AccountAddress,
        validator_address: ValidatorAddress,
        amount: Decimal,
    },
}

/// Broadcast receipt surfaced by the chain client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    /// Transaction hash as returned by the node.
    pub txhash: String,
    /// Block height the transaction landed in (0 while unconfirmed).
    pub height: u64,
    /// ABCI result code; 0 is success.
    pub code: u32,
    /// Raw log emitted by the node.
    pub raw_log: String,
}

/// Errors surfaced by chain-client implementations.
///
/// These are infrastructure failures. The compounder never converts them
/// into business outcomes; they bubble to the caller unmodified.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or query failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction build or broadcast failed.
    #[error("broadcast failed: {0}")]
    Broadcast(String),

    /// Request to the node timed out.
    #[error("chain request timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type for chain-client operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn validator_address_requires_prefix() {
        let ok: Result<ValidatorAddress, _> = "injvaloper1qwexv7c6sm95lwhzn9027vyu2ccneaqa7c24zk".parse();
        assert!(ok.is_ok());

        let err: Result<ValidatorAddress, _> = "inj1qwexv7c6sm95lwhzn9027vyu2ccneaqa7c24zk".parse();
        let err = err.unwrap_err();
        assert!(err.to_string().contains("injvaloper"));
    }

    #[test]
    fn validator_address_roundtrips_display() {
        let addr: ValidatorAddress = "injvaloper1abc".parse().unwrap();
        assert_eq!(addr.to_string(), "injvaloper1abc");
        assert_eq!(addr.as_str(), "injvaloper1abc");
    }

    #[test]
    fn stake_msg_serializes_tagged() {
        let msg = StakeMsg::Delegate {
            delegator_address: AccountAddress::new("inj1abc"),
            validator_address: "injvaloper1abc".parse().unwrap(),
            amount: dec!(1.5),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "delegate");
        assert_eq!(json["delegator_address"], "inj1abc");
    }

    #[test]
    fn chain_error_display() {
        let err = ChainError::Timeout(10);
        assert_eq!(err.to_string(), "chain request timed out after 10 seconds");
    }
}
