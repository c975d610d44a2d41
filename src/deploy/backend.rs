//! The chain operations the orchestrator depends on.

use alloy::primitives::{Address, Bytes, U256};

use crate::blockchain::contract::{add_approved_user_calldata, create_nft_calldata};
use crate::blockchain::transaction::{call_request, deploy_request, transfer_request};
use crate::blockchain::{BlockchainError, BlockchainResult, ChainClient, TxOutcome};

/// A freshly deployed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub outcome: TxOutcome,
}

/// Operations against the ledger. Every mutating call returns only once
/// its transaction is confirmed.
#[allow(async_fn_in_trait)]
pub trait ChainBackend {
    /// Address that signs every transaction.
    fn signer_address(&self) -> Address;

    /// Native balance of `address`, in wei.
    async fn balance(&self, address: Address) -> BlockchainResult<U256>;

    /// Publish a new contract instance.
    async fn deploy(&self) -> BlockchainResult<Deployment>;

    /// Send `value` wei to `to`.
    async fn transfer(&self, to: Address, value: U256) -> BlockchainResult<TxOutcome>;

    /// `addApprovedUser(user)` on `contract`.
    async fn add_approved_user(&self, contract: Address, user: Address)
        -> BlockchainResult<TxOutcome>;

    /// `createNFT(token_uri)` on `contract`.
    async fn create_nft(&self, contract: Address, token_uri: &str) -> BlockchainResult<TxOutcome>;
}

/// Backend talking to a real endpoint.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    client: ChainClient,
    bytecode: Bytes,
}

impl LiveBackend {
    pub fn new(client: ChainClient, bytecode: Bytes) -> Self {
        Self { client, bytecode }
    }
}

impl ChainBackend for LiveBackend {
    fn signer_address(&self) -> Address {
        self.client.signer_address()
    }

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        self.client.get_balance(address).await
    }

    async fn deploy(&self) -> BlockchainResult<Deployment> {
        let tx = deploy_request(self.signer_address(), self.bytecode.clone());
        let receipt = self.client.send_and_confirm(tx).await?;
        let address = receipt
            .contract_address
            .ok_or(BlockchainError::MissingContractAddress(receipt.transaction_hash))?;
        Ok(Deployment {
            address,
            outcome: TxOutcome::from(&receipt),
        })
    }

    async fn transfer(&self, to: Address, value: U256) -> BlockchainResult<TxOutcome> {
        let tx = transfer_request(self.signer_address(), to, value);
        let receipt = self.client.send_and_confirm(tx).await?;
        Ok(TxOutcome::from(&receipt))
    }

    async fn add_approved_user(
        &self,
        contract: Address,
        user: Address,
    ) -> BlockchainResult<TxOutcome> {
        let tx = call_request(self.signer_address(), contract, add_approved_user_calldata(user));
        let receipt = self.client.send_and_confirm(tx).await?;
        Ok(TxOutcome::from(&receipt))
    }

    async fn create_nft(&self, contract: Address, token_uri: &str) -> BlockchainResult<TxOutcome> {
        let tx = call_request(self.signer_address(), contract, create_nft_calldata(token_uri));
        let receipt = self.client.send_and_confirm(tx).await?;
        Ok(TxOutcome::from(&receipt))
    }
}
