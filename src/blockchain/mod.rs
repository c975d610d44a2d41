//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key)
//!     → wallet.rs (key loading)
//!     → client.rs (provider with signer, timeouts, receipts)
//!     → transaction.rs (transfer / call / create requests)
//!     → contract.rs (CustomNFT calldata, artifact bytecode)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC reads have configurable timeouts

pub mod client;
pub mod contract;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{BlockchainError, BlockchainResult, ChainId, TxOutcome};
pub use wallet::Wallet;
