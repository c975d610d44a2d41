//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that addresses and amounts parse into chain types
//! - Validate value ranges (timeouts > 0, non-zero fee)
//! - Check the log level parses as a filter directive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DeployConfig → Result<(), Vec<ValidationError>>
//! - Runs before any RPC connection is opened

use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, U256};
use tracing_subscriber::EnvFilter;

use crate::config::schema::DeployConfig;
use crate::observability::logging::default_filter;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. `fee.recipient`).
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a decimal ether amount into wei without precision loss.
pub fn parse_fee_amount(amount: &str) -> Result<U256, String> {
    let wei = parse_ether(amount.trim())
        .map_err(|e| format!("invalid ether amount '{}': {}", amount, e))?;
    if wei.is_zero() {
        return Err("fee amount must be greater than zero".to_string());
    }
    Ok(wei)
}

/// Parse a fee recipient address, rejecting the zero address.
pub fn parse_recipient(recipient: &str) -> Result<Address, String> {
    let address: Address = recipient
        .trim()
        .parse()
        .map_err(|e| format!("invalid address '{}': {}", recipient, e))?;
    if address == Address::ZERO {
        return Err("recipient must not be the zero address".to_string());
    }
    Ok(address)
}

/// Check the token URI list: non-empty, and no blank entries.
pub fn check_token_uris(token_uris: &[String]) -> Vec<ValidationError> {
    if token_uris.is_empty() {
        return vec![ValidationError::new(
            "mint.token_uris",
            "at least one token URI is required",
        )];
    }
    token_uris
        .iter()
        .enumerate()
        .filter(|(_, uri)| uri.trim().is_empty())
        .map(|(i, _)| ValidationError::new(format!("mint.token_uris[{}]", i), "must not be empty"))
        .collect()
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &DeployConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.network.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError::new(
            "network.rpc_url",
            format!("invalid URL '{}': {}", config.network.rpc_url, e),
        ));
    }
    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("network.rpc_timeout_secs", "must be greater than zero"));
    }
    if config.network.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "network.confirmation_timeout_secs",
            "must be greater than zero",
        ));
    }
    if config.network.poll_interval_ms == 0 {
        errors.push(ValidationError::new("network.poll_interval_ms", "must be greater than zero"));
    }
    if config.network.confirmations == 0 {
        errors.push(ValidationError::new("network.confirmations", "must be at least 1"));
    }

    if config.contract.artifact_path.trim().is_empty() {
        errors.push(ValidationError::new("contract.artifact_path", "must not be empty"));
    }

    if let Err(e) = parse_fee_amount(&config.fee.amount) {
        errors.push(ValidationError::new("fee.amount", e));
    }
    if let Err(e) = parse_recipient(&config.fee.recipient) {
        errors.push(ValidationError::new("fee.recipient", e));
    }

    errors.extend(check_token_uris(&config.mint.token_uris));

    if let Err(e) = EnvFilter::try_new(default_filter(&config.observability)) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("invalid log level '{}': {}", config.observability.log_level, e),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
