//! The deployment sequence.
//!
//! ```text
//! resolve signer → deploy → transfer fee → approve deployer → create NFT #1 → create NFT #2 ...
//! ```
//!
//! Each step awaits its confirmation before the next one is submitted. The
//! first failure ends the run; nothing already committed is undone.

use std::path::Path;

use alloy::primitives::utils::format_ether;

use crate::blockchain::contract::load_artifact_bytecode;
use crate::blockchain::{ChainClient, Wallet};
use crate::config::validation::check_token_uris;
use crate::config::{ConfigError, DeployConfig};
use crate::deploy::backend::{ChainBackend, LiveBackend};
use crate::deploy::report::{DeploymentReport, FeeTransfer, MintRecord};
use crate::deploy::types::{DeployError, DeployPlan, Step};

/// Run the full sequence against `backend`.
pub async fn run<B: ChainBackend>(
    backend: &B,
    plan: &DeployPlan,
) -> Result<DeploymentReport, DeployError> {
    let uri_errors = check_token_uris(&plan.token_uris);
    if !uri_errors.is_empty() {
        return Err(ConfigError::Validation(uri_errors).into());
    }

    let deployer = backend.signer_address();
    tracing::info!("Deploying contracts with the account: {}", deployer);

    let initial_balance = backend
        .balance(deployer)
        .await
        .map_err(|e| DeployError::step(Step::ResolveSigner, e))?;
    tracing::info!(
        balance_wei = %initial_balance,
        "Account balance: {} {}",
        format_ether(initial_balance),
        plan.native_symbol
    );

    let deployment = backend
        .deploy()
        .await
        .map_err(|e| DeployError::step(Step::Deploy, e))?;
    let contract = deployment.address;
    tracing::info!(tx_hash = %deployment.outcome.tx_hash, "CustomNFT address: {}", contract);

    tracing::info!(
        "Transferring {} {} to {}...",
        format_ether(plan.fee),
        plan.native_symbol,
        plan.fee_recipient
    );
    let transfer = backend
        .transfer(plan.fee_recipient, plan.fee)
        .await
        .map_err(|e| DeployError::step(Step::Transfer, e))?;

    tracing::info!("Adding {} as an approved user...", deployer);
    let approval = backend
        .add_approved_user(contract, deployer)
        .await
        .map_err(|e| DeployError::step(Step::ApproveUser, e))?;
    tracing::info!("Deployer {} is now an approved user and can mint NFTs!", deployer);

    let mut mints = Vec::with_capacity(plan.token_uris.len());
    for (i, token_uri) in plan.token_uris.iter().enumerate() {
        let step = Step::CreateNft(i + 1);
        tracing::info!(token_uri = %token_uri, "Creating NFT #{}...", i + 1);
        let outcome = backend
            .create_nft(contract, token_uri)
            .await
            .map_err(|e| DeployError::step(step, e))?;
        tracing::info!(tx_hash = %outcome.tx_hash, "Created NFT #{}", i + 1);
        mints.push(MintRecord {
            token_uri: token_uri.clone(),
            outcome,
        });
    }

    Ok(DeploymentReport {
        deployer,
        initial_balance,
        contract,
        deployment: deployment.outcome,
        fee_transfer: FeeTransfer {
            recipient: plan.fee_recipient,
            amount: plan.fee,
            outcome: transfer,
        },
        approval,
        mints,
    })
}

/// Set up the live backend from configuration and run the sequence.
///
/// The signer comes from `NFT_DEPLOYER_PRIVATE_KEY`; a missing or invalid
/// key fails before any connection is made.
pub async fn execute(config: &DeployConfig) -> Result<DeploymentReport, DeployError> {
    let wallet = Wallet::from_env().map_err(DeployError::Setup)?;
    let client = ChainClient::new(config.network.clone(), wallet).map_err(DeployError::Setup)?;
    execute_with(config, client).await
}

/// Run the sequence through an existing client.
///
/// Setup order: plan, artifact, chain id. All of it happens before the first
/// transaction, so a setup error never leaves state behind. A report that
/// cannot be written is logged and does not fail the run, since every
/// transaction has already been confirmed by then.
pub async fn execute_with(
    config: &DeployConfig,
    client: ChainClient,
) -> Result<DeploymentReport, DeployError> {
    let plan = DeployPlan::from_config(config)?;

    let bytecode = load_artifact_bytecode(Path::new(&config.contract.artifact_path))
        .map_err(DeployError::Setup)?;
    client.verify_chain_id().await.map_err(DeployError::Setup)?;

    let backend = LiveBackend::new(client, bytecode);
    let report = run(&backend, &plan).await?;

    if let Some(path) = &config.output.report_path {
        if let Err(e) = report.write_json(Path::new(path)) {
            tracing::warn!(error = %e, contract = %report.contract, "Deployment succeeded but report was not saved");
        }
    }

    Ok(report)
}
