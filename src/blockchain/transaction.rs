//! Transaction request construction.
//!
//! Requests only carry `from`, `to`/create, `value` and calldata. Gas,
//! nonce and chain id are left for the provider's fillers.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;

/// Plain native-currency transfer.
pub fn transfer_request(from: Address, to: Address, value: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(value)
}

/// Contract call with ABI-encoded calldata and no value attached.
pub fn call_request(from: Address, contract: Address, data: Bytes) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(contract)
        .with_input(data)
}

/// Contract creation from raw creation bytecode.
pub fn deploy_request(from: Address, bytecode: Bytes) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_deploy_code(bytecode)
}
