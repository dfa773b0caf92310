//! Shared test double for the chain-client capability.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use injective_staking::chain::{
    AccountAddress, Balance, ChainClient, ChainError, ChainResult, StakeMsg, TxResponse,
};

/// Scripted chain client: returns balances from a script (one per query,
/// last value repeats) and logs every broadcast message.
pub struct MockChainClient {
    address: AccountAddress,
    balances: Mutex<VecDeque<Decimal>>,
    queries: AtomicU32,
    broadcasts: Mutex<Vec<StakeMsg>>,
    fail_broadcast: bool,
    fail_balance_after: Option<u32>,
}

impl MockChainClient {
    pub fn new(balances: impl IntoIterator<Item = Decimal>) -> Self {
        Self {
            address: AccountAddress::new("inj1cml96vmptgw99syqrrz8az79xer2pcgp0a885r"),
            balances: Mutex::new(balances.into_iter().collect()),
            queries: AtomicU32::new(0),
            broadcasts: Mutex::new(Vec::new()),
            fail_broadcast: false,
            fail_balance_after: None,
        }
    }

    /// A client whose broadcasts are rejected by the node.
    pub fn with_failing_broadcast(balances: impl IntoIterator<Item = Decimal>) -> Self {
        Self {
            fail_broadcast: true,
            ..Self::new(balances)
        }
    }

    /// A client whose balance queries fail with an RPC error after `reads`
    /// successful reads.
    pub fn with_failing_balance_after(
        reads: u32,
        balances: impl IntoIterator<Item = Decimal>,
    ) -> Self {
        Self {
            fail_balance_after: Some(reads),
            ..Self::new(balances)
        }
    }

    /// Number of balance queries issued so far.
    pub fn query_count(&self) -> u32 {
        self.queries.load(Ordering::SeqCst)
    }

    /// Every message broadcast so far, in order.
    pub fn broadcast_log(&self) -> Vec<StakeMsg> {
        self.broadcasts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    fn address(&self) -> &AccountAddress {
        &self.address
    }

    async fn bank_balance(&self, _address: &AccountAddress, denom: &str) -> ChainResult<Balance> {
        let reads_so_far = self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_balance_after {
            if reads_so_far >= limit {
                return Err(ChainError::Rpc("bank query failed".to_string()));
            }
        }
        let mut script = self.balances.lock().unwrap();
        let amount = if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            *script.front().expect("balance script must not be empty")
        };
        Ok(Balance::new(denom, amount))
    }

    async fn broadcast(&self, msg: StakeMsg) -> ChainResult<TxResponse> {
        if self.fail_broadcast {
            return Err(ChainError::Broadcast("node rejected transaction".to_string()));
        }
        let mut log = self.broadcasts.lock().unwrap();
        log.push(msg);
        let seq = log.len();
        Ok(TxResponse {
            txhash: format!("HASH{seq}"),
            height: 100 + seq as u64,
            code: 0,
            raw_log: String::new(),
        })
    }
}
