//! Deployment subsystem.
//!
//! # Data Flow
//! ```text
//! DeployConfig
//!     → types.rs (DeployPlan: fee in wei, recipient, token URIs)
//!     → backend.rs (LiveBackend over ChainClient)
//!     → orchestrator.rs (strictly sequential steps)
//!     → report.rs (DeploymentReport, optional JSON file)
//! ```
//!
//! # Design Decisions
//! - One step in flight at a time; each waits for its receipt
//! - Any failure is fatal and carries the failing step
//! - No retries and no rollback

pub mod backend;
pub mod orchestrator;
pub mod report;
pub mod types;

pub use backend::{ChainBackend, Deployment, LiveBackend};
pub use orchestrator::{execute, execute_with, run};
pub use report::DeploymentReport;
pub use types::{DeployError, DeployPlan, Step};
