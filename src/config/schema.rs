//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a deployment run.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the deployer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DeployConfig {
    /// Chain connection settings.
    pub network: NetworkConfig,

    /// Compiled contract to deploy.
    pub contract: ContractConfig,

    /// Fee paid before the deployer registers itself.
    pub fee: FeeConfig,

    /// Tokens minted once the deployer is approved.
    pub mint: MintConfig,

    /// Where to write the deployment report.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain ID. Verified against the endpoint when set.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations to wait for on every transaction.
    pub confirmations: u64,

    /// Maximum time to wait for a transaction to confirm, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt polling interval in milliseconds.
    pub poll_interval_ms: u64,

    /// Symbol of the native currency, used in log output only.
    pub native_symbol: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: None,
            rpc_timeout_secs: 10,
            confirmations: 1,
            confirmation_timeout_secs: 120,
            poll_interval_ms: 2000,
            native_symbol: "MATIC".to_string(),
        }
    }
}

/// Contract artifact configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Path to the Hardhat artifact JSON holding the creation bytecode.
    pub artifact_path: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            artifact_path: "artifacts/contracts/CustomNFT.sol/CustomNFT.json".to_string(),
        }
    }
}

/// Fee transfer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
    /// Amount in ether units as a decimal string (e.g. "0.1").
    pub amount: String,

    /// Address receiving the fee.
    pub recipient: String,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            amount: "0.1".to_string(),
            // Placeholder, replace with the real fee recipient.
            recipient: "0x1234567890123456789012345678901234567890".to_string(),
        }
    }
}

/// Minting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MintConfig {
    /// Token URIs, minted one `createNFT` call each, in order.
    pub token_uris: Vec<String>,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            token_uris: vec![
                "https://mybaseurl.com/1".to_string(),
                "https://mybaseurl.com/2".to_string(),
            ],
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a JSON deployment report here after a successful run.
    pub report_path: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
