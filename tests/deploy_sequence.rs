//! Ordering and failure behaviour of the deployment sequence.

use alloy::primitives::U256;
use nft_deployer::blockchain::BlockchainError;
use nft_deployer::deploy::{run, DeployError, Step};

mod common;

use common::{default_plan, Call, FailOn, RecordingBackend, CONTRACT, DEPLOYER, RECIPIENT};

#[tokio::test]
async fn test_successful_run_submits_five_calls_in_order() {
    let backend = RecordingBackend::new();
    let report = run(&backend, &default_plan()).await.unwrap();

    assert_eq!(
        backend.calls(),
        vec![
            Call::Deploy,
            Call::Transfer {
                to: RECIPIENT,
                value: U256::from(100_000_000_000_000_000u64),
            },
            Call::ApproveUser {
                contract: CONTRACT,
                user: DEPLOYER,
            },
            Call::CreateNft {
                contract: CONTRACT,
                token_uri: "https://mybaseurl.com/1".into(),
            },
            Call::CreateNft {
                contract: CONTRACT,
                token_uri: "https://mybaseurl.com/2".into(),
            },
        ]
    );

    assert_eq!(report.deployer, DEPLOYER);
    assert_eq!(report.contract, CONTRACT);
    assert_eq!(report.fee_transfer.recipient, RECIPIENT);
    assert_eq!(report.fee_transfer.amount, U256::from(100_000_000_000_000_000u64));
    assert_eq!(report.mints.len(), 2);

    // Confirmation blocks follow submission order.
    let blocks: Vec<u64> = [&report.deployment, &report.fee_transfer.outcome, &report.approval]
        .into_iter()
        .chain(report.mints.iter().map(|m| &m.outcome))
        .map(|o| o.block_number.unwrap())
        .collect();
    assert_eq!(blocks, vec![101, 102, 103, 104, 105]);
}

#[tokio::test]
async fn test_balance_failure_submits_nothing() {
    let backend = RecordingBackend::failing_on(FailOn::Balance);
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::ResolveSigner));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_deploy_failure_stops_run() {
    let backend = RecordingBackend::failing_on(FailOn::Deploy);
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::Deploy));
    assert_eq!(backend.calls(), vec![Call::Deploy]);
}

#[tokio::test]
async fn test_transfer_failure_skips_grant_and_creates() {
    let backend = RecordingBackend::failing_on(FailOn::Transfer);
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::Transfer));
    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert!(!calls
        .iter()
        .any(|c| matches!(c, Call::ApproveUser { .. } | Call::CreateNft { .. })));
}

#[tokio::test]
async fn test_grant_failure_skips_creates() {
    let backend = RecordingBackend::failing_on(FailOn::ApproveUser);
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::ApproveUser));
    assert!(matches!(
        err,
        DeployError::Step {
            source: BlockchainError::Reverted(_),
            ..
        }
    ));
    assert!(!backend
        .calls()
        .iter()
        .any(|c| matches!(c, Call::CreateNft { .. })));
}

#[tokio::test]
async fn test_first_create_failure_skips_second() {
    let backend = RecordingBackend::failing_on(FailOn::CreateNft(1));
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::CreateNft(1)));
    let creates: Vec<Call> = backend
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::CreateNft { .. }))
        .collect();
    assert_eq!(
        creates,
        vec![Call::CreateNft {
            contract: CONTRACT,
            token_uri: "https://mybaseurl.com/1".into(),
        }]
    );
}

#[tokio::test]
async fn test_second_create_failure_reports_step_two() {
    let backend = RecordingBackend::failing_on(FailOn::CreateNft(2));
    let err = run(&backend, &default_plan()).await.unwrap_err();

    assert_eq!(err.failed_step(), Some(Step::CreateNft(2)));
    assert_eq!(backend.calls().len(), 5);
    assert!(err.to_string().starts_with("Step 'create NFT #2' failed"));
}

#[tokio::test]
async fn test_token_uris_passed_unmodified() {
    let mut plan = default_plan();
    plan.token_uris = vec![
        "ipfs://bafy/meta 1.json".to_string(),
        "https://example.com/nft?id=2&x=ü".to_string(),
    ];

    let backend = RecordingBackend::new();
    let report = run(&backend, &plan).await.unwrap();

    let uris: Vec<String> = backend
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::CreateNft { token_uri, .. } => Some(token_uri),
            _ => None,
        })
        .collect();
    assert_eq!(uris, plan.token_uris);
    assert_eq!(report.mints[1].token_uri, plan.token_uris[1]);
}

#[tokio::test]
async fn test_empty_token_uris_rejected_before_any_call() {
    let mut plan = default_plan();
    plan.token_uris.clear();

    let backend = RecordingBackend::new();
    let err = run(&backend, &plan).await.unwrap_err();

    assert!(matches!(err, DeployError::Config(_)));
    assert!(backend.calls().is_empty());
}
