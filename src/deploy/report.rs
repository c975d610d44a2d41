//! Summary of a completed deployment.

use std::fs;
use std::path::Path;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::blockchain::TxOutcome;
use crate::deploy::types::DeployError;

/// Everything a successful run committed, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentReport {
    pub deployer: Address,
    /// Deployer balance before the run, in wei.
    pub initial_balance: U256,
    pub contract: Address,
    pub deployment: TxOutcome,
    pub fee_transfer: FeeTransfer,
    pub approval: TxOutcome,
    pub mints: Vec<MintRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTransfer {
    pub recipient: Address,
    /// Wei.
    pub amount: U256,
    pub outcome: TxOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRecord {
    pub token_uri: String,
    pub outcome: TxOutcome,
}

impl DeploymentReport {
    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), DeployError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DeployError::Report(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| DeployError::Report(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Deployment report written");
        Ok(())
    }
}
