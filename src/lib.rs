//! Deploys the `CustomNFT` contract and runs its bootstrap sequence.
//!
//! ```text
//! config ──▶ deploy::orchestrator ──▶ deploy::backend ──▶ blockchain::client ──▶ RPC
//!                    │
//!                    └──▶ deploy::report (JSON)
//! ```

pub mod blockchain;
pub mod config;
pub mod deploy;
pub mod observability;

pub use config::schema::DeployConfig;
pub use deploy::{DeployError, DeploymentReport};
