//! Shared utilities for deployment sequence tests.

#![allow(dead_code)]

use std::sync::Mutex;

use alloy::primitives::{address, Address, TxHash, B256, U256};
use alloy::providers::mock::Asserter;
use alloy::providers::{Provider, ProviderBuilder};
use nft_deployer::blockchain::{BlockchainError, BlockchainResult, ChainClient, TxOutcome, Wallet};
use nft_deployer::config::NetworkConfig;
use nft_deployer::deploy::{ChainBackend, DeployPlan, Deployment};
use serde_json::{json, Value};

pub const DEPLOYER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const RECIPIENT: Address = address!("1234567890123456789012345678901234567890");

/// Anvil's first account; its address is `DEPLOYER`.
pub const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// A submission observed by the mock ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Deploy,
    Transfer { to: Address, value: U256 },
    ApproveUser { contract: Address, user: Address },
    CreateNft { contract: Address, token_uri: String },
}

/// Which operation should be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    Balance,
    Deploy,
    Transfer,
    ApproveUser,
    /// 1-based index of the create call.
    CreateNft(usize),
}

/// Backend that records every submission and fails on demand.
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    fail_on: Option<FailOn>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing_on(fail_on: FailOn) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(fail_on),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn submit(&self, call: Call, fail: bool) -> BlockchainResult<TxOutcome> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        let n = calls.len();
        if fail {
            return Err(BlockchainError::Reverted(TxHash::with_last_byte(n as u8)));
        }
        Ok(TxOutcome {
            tx_hash: TxHash::with_last_byte(n as u8),
            block_number: Some(100 + n as u64),
            gas_used: 21_000,
        })
    }
}

impl ChainBackend for RecordingBackend {
    fn signer_address(&self) -> Address {
        DEPLOYER
    }

    async fn balance(&self, _address: Address) -> BlockchainResult<U256> {
        if self.fail_on == Some(FailOn::Balance) {
            return Err(BlockchainError::Timeout(10));
        }
        Ok(U256::from(10u64).pow(U256::from(19u64)))
    }

    async fn deploy(&self) -> BlockchainResult<Deployment> {
        let outcome = self.submit(Call::Deploy, self.fail_on == Some(FailOn::Deploy))?;
        Ok(Deployment {
            address: CONTRACT,
            outcome,
        })
    }

    async fn transfer(&self, to: Address, value: U256) -> BlockchainResult<TxOutcome> {
        self.submit(Call::Transfer { to, value }, self.fail_on == Some(FailOn::Transfer))
    }

    async fn add_approved_user(
        &self,
        contract: Address,
        user: Address,
    ) -> BlockchainResult<TxOutcome> {
        self.submit(
            Call::ApproveUser { contract, user },
            self.fail_on == Some(FailOn::ApproveUser),
        )
    }

    async fn create_nft(&self, contract: Address, token_uri: &str) -> BlockchainResult<TxOutcome> {
        let index = 1 + self
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateNft { .. }))
            .count();
        self.submit(
            Call::CreateNft {
                contract,
                token_uri: token_uri.to_string(),
            },
            self.fail_on == Some(FailOn::CreateNft(index)),
        )
    }
}

/// Plan matching the built-in defaults.
pub fn default_plan() -> DeployPlan {
    DeployPlan::from_config(&nft_deployer::DeployConfig::default()).unwrap()
}

/// Network settings for a mocked endpoint: one confirmation, fast polling.
pub fn mock_network() -> NetworkConfig {
    NetworkConfig {
        confirmations: 1,
        confirmation_timeout_secs: 5,
        poll_interval_ms: 10,
        ..NetworkConfig::default()
    }
}

/// A client whose RPC responses are served, in order, by `asserter`.
///
/// No fillers are installed, so each `send_transaction` is exactly one
/// `eth_sendTransaction` request.
pub fn mock_client(asserter: &Asserter, network: NetworkConfig) -> ChainClient {
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone())
        .erased();
    let wallet = Wallet::from_private_key(DEPLOYER_KEY).unwrap();
    ChainClient::with_provider(provider, wallet, network)
}

/// Transaction hash for the n-th submission.
pub fn tx_hash(n: u8) -> TxHash {
    TxHash::with_last_byte(n)
}

/// JSON-RPC receipt for `tx_hash` mined in `block`.
pub fn receipt_json(tx_hash: TxHash, block: u64, success: bool, contract: Option<Address>) -> Value {
    json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": [],
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::with_last_byte(block as u8),
        "blockNumber": format!("{:#x}", block),
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": DEPLOYER,
        "to": if contract.is_some() { Value::Null } else { json!(RECIPIENT) },
        "contractAddress": contract,
    })
}

/// Queue a submission that is confirmed on the first receipt poll.
pub fn push_confirmed(asserter: &Asserter, hash: TxHash, block: u64, contract: Option<Address>) {
    asserter.push_success(&hash);
    asserter.push_success(&receipt_json(hash, block, true, contract));
}

/// Minimal Hardhat artifact on disk, returned as its path.
pub fn write_artifact(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "nft-deployer-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{ "contractName": "CustomNFT", "abi": [], "bytecode": "0x6080604052" }"#,
    )
    .unwrap();
    path
}
