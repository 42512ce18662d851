use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

#[derive(Clone)]
pub struct ChainContext {
    pub provider: DynProvider,
    pub chain_id: u64,
}

impl ChainContext {
    /// Connects to `rpc_url` with `signer` filling and signing transactions.
    pub async fn connect(rpc_url: &str, signer: PrivateKeySigner) -> eyre::Result<Self> {
        let provider = ProviderBuilder::new()
            .wallet(signer)
            .connect(rpc_url)
            .await?
            .erased();
        let chain_id = provider.get_chain_id().await?;
        Ok(Self { provider, chain_id })
    }
}
