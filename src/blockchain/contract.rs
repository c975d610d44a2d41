//! `CustomNFT` bindings and artifact loading.

use std::fs;
use std::path::Path;

use alloy::primitives::{Address, Bytes};
use alloy::sol;
use alloy::sol_types::SolCall;
use serde::Deserialize;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

sol! {
    /// Entry points of the deployed NFT contract used by the deployer.
    interface ICustomNFT {
        /// Allow `user` to mint.
        function addApprovedUser(address user) external;

        /// Mint a token pointing at `tokenURI`, returning its id.
        function createNFT(string memory tokenURI) external returns (uint256);
    }
}

/// The fields of a Hardhat build artifact the deployer needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    bytecode: Bytes,
}

/// Parse creation bytecode out of Hardhat artifact JSON.
pub fn parse_artifact_bytecode(json: &str) -> BlockchainResult<Bytes> {
    let artifact: HardhatArtifact = serde_json::from_str(json)
        .map_err(|e| BlockchainError::Artifact(format!("Invalid artifact JSON: {}", e)))?;

    if artifact.bytecode.is_empty() {
        return Err(BlockchainError::Artifact(format!(
            "{} has no creation bytecode (abstract contract or interface?)",
            artifact.contract_name.as_deref().unwrap_or("artifact")
        )));
    }

    Ok(artifact.bytecode)
}

/// Read creation bytecode from a Hardhat artifact file.
pub fn load_artifact_bytecode(path: &Path) -> BlockchainResult<Bytes> {
    let json = fs::read_to_string(path).map_err(|e| {
        BlockchainError::Artifact(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_artifact_bytecode(&json)
}

/// Calldata for `addApprovedUser(user)`.
pub fn add_approved_user_calldata(user: Address) -> Bytes {
    ICustomNFT::addApprovedUserCall { user }.abi_encode().into()
}

/// Calldata for `createNFT(token_uri)`.
pub fn create_nft_calldata(token_uri: &str) -> Bytes {
    ICustomNFT::createNFTCall {
        tokenURI: token_uri.to_string(),
    }
    .abi_encode()
    .into()
}
