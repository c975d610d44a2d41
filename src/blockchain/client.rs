//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint with the deployer's signer attached
//! - Query chain state (chain id, balances, receipts)
//! - Submit transactions and poll until they are confirmed
//! - Handle timeouts and network errors

use alloy::network::{Ethereum, ReceiptResponse as _};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::Wallet;
use crate::config::NetworkConfig;

/// RPC client bound to a single endpoint and signer.
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider<Ethereum>,
    wallet: Wallet,
    config: NetworkConfig,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new client.
    ///
    /// No request is sent here; an unreachable endpoint surfaces on the
    /// first call.
    pub fn new(config: NetworkConfig, wallet: Wallet) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(wallet.to_ethereum_wallet())
            .connect_http(url)
            .erased();

        tracing::info!(
            rpc_url = %config.rpc_url,
            signer = %wallet.address(),
            "Chain client initialized"
        );

        Ok(Self::with_provider(provider, wallet, config))
    }

    /// Create a client over an already built provider.
    ///
    /// The provider must be able to sign for `wallet`, either through a
    /// wallet filler or because the node holds the key.
    pub fn with_provider(
        provider: DynProvider<Ethereum>,
        wallet: Wallet,
        config: NetworkConfig,
    ) -> Self {
        Self {
            provider,
            wallet,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
        }
    }

    /// Verify the connected chain ID matches configuration, if one is set.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let Some(expected) = self.config.chain_id else {
            return Ok(());
        };
        let actual = self.get_chain_id().await?;
        if actual.0 != expected {
            return Err(BlockchainError::ChainMismatch {
                expected,
                actual: actual.0,
            });
        }
        tracing::info!(chain_id = expected, "Chain ID verified");
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.rpc(self.provider.get_chain_id()).await.map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        self.rpc(self.provider.get_block_number()).await
    }

    /// Get the balance of an address.
    pub async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        self.rpc(self.provider.get_balance(address)).await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.rpc(self.provider.get_transaction_receipt(tx_hash)).await
    }

    /// Broadcast a transaction and wait until it is confirmed.
    pub async fn send_and_confirm(
        &self,
        tx: TransactionRequest,
    ) -> BlockchainResult<TransactionReceipt> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;
        let tx_hash = *pending.tx_hash();

        tracing::debug!(tx_hash = %tx_hash, "Transaction submitted, awaiting confirmation");

        self.wait_for_confirmation(tx_hash).await
    }

    /// Poll until `tx_hash` has the configured number of confirmations.
    ///
    /// A receipt with a failed status is returned as `Reverted`. The
    /// inclusion block counts as the first confirmation.
    pub async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<TransactionReceipt> {
        let required = self.config.confirmations;
        let timeout_duration = Duration::from_secs(self.config.confirmation_timeout_secs);
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let Some(receipt) = self.get_transaction_receipt(tx_hash).await? else {
                    tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                    continue;
                };

                if !receipt.status() {
                    return Err(BlockchainError::Reverted(tx_hash));
                }

                if required <= 1 {
                    return Ok(receipt);
                }

                let current_block = self.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) + 1;

                if confirmations >= required {
                    return Ok(receipt);
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        let receipt = match result {
            Ok(receipt) => receipt?,
            Err(_) => return Err(BlockchainError::ConfirmationTimeout(tx_hash)),
        };

        tracing::debug!(
            tx_hash = %tx_hash,
            block_number = receipt.block_number,
            gas_used = receipt.gas_used,
            "Transaction confirmed"
        );

        Ok(receipt)
    }

    /// The signer's address.
    pub fn signer_address(&self) -> Address {
        self.wallet.address()
    }

    /// Run a read RPC under the configured timeout.
    async fn rpc<T, E, F>(&self, request: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("signer", &self.wallet.address())
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
