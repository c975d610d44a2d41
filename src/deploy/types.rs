//! Deployment plan, steps and errors.

use alloy::primitives::{Address, U256};
use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::validation::{
    check_token_uris, parse_fee_amount, parse_recipient, ValidationError,
};
use crate::config::{ConfigError, DeployConfig};

/// One stage of the deployment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Query the deployer's balance.
    ResolveSigner,
    /// Publish the contract.
    Deploy,
    /// Send the fee to the recipient.
    Transfer,
    /// Register the deployer as an approved user.
    ApproveUser,
    /// Mint the n-th token (1-based).
    CreateNft(usize),
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::ResolveSigner => write!(f, "resolve signer"),
            Step::Deploy => write!(f, "deploy contract"),
            Step::Transfer => write!(f, "fee transfer"),
            Step::ApproveUser => write!(f, "approve deployer"),
            Step::CreateNft(n) => write!(f, "create NFT #{}", n),
        }
    }
}

/// Errors that end a deployment run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure before the first step (wallet, client, artifact, chain id).
    #[error("Setup failed: {0}")]
    Setup(#[source] BlockchainError),

    /// Any failed step. Earlier steps stay committed on-chain.
    #[error("Step '{step}' failed: {source}")]
    Step {
        step: Step,
        #[source]
        source: BlockchainError,
    },

    #[error("Failed to write report: {0}")]
    Report(String),
}

impl DeployError {
    pub fn step(step: Step, source: BlockchainError) -> Self {
        Self::Step { step, source }
    }

    /// The step that failed, if the run got that far.
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            DeployError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Typed parameters of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    /// Fee in wei.
    pub fee: U256,
    pub fee_recipient: Address,
    /// Minted in this order.
    pub token_uris: Vec<String>,
    pub native_symbol: String,
}

impl DeployPlan {
    pub fn from_config(config: &DeployConfig) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();

        let fee = match parse_fee_amount(&config.fee.amount) {
            Ok(fee) => Some(fee),
            Err(e) => {
                errors.push(ValidationError::new("fee.amount", e));
                None
            }
        };
        let fee_recipient = match parse_recipient(&config.fee.recipient) {
            Ok(address) => Some(address),
            Err(e) => {
                errors.push(ValidationError::new("fee.recipient", e));
                None
            }
        };
        errors.extend(check_token_uris(&config.mint.token_uris));

        match (fee, fee_recipient) {
            (Some(fee), Some(fee_recipient)) if errors.is_empty() => Ok(Self {
                fee,
                fee_recipient,
                token_uris: config.mint.token_uris.clone(),
                native_symbol: config.network.native_symbol.clone(),
            }),
            _ => Err(ConfigError::Validation(errors)),
        }
    }
}
