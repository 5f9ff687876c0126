use crate::{error::Error, ether::provider::MultiTransportProvider};
use alloy::primitives::Address;
use std::str::FromStr;
use tracing::{debug, trace};

/// Get the chainId of the provided RPC URL
///
/// ```no_run
/// use zklint_common::ether::rpc::chain_id;
///
/// // let chain_id = chain_id("https://eth.llamarpc.com").await?;
/// // assert_eq!(chain_id, 1);
/// ```
pub async fn chain_id(rpc_url: &str) -> Result<u64, Error> {
    trace!("fetching chain id from node '{}'", &rpc_url);
    let provider = MultiTransportProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;
    provider
        .get_chainid()
        .await
        .map_err(|e| Error::RpcError(format!("failed to get chain id: {e}")))
}

/// Get the deployed bytecode of the provided contract address
///
/// ```no_run
/// use zklint_common::ether::rpc::get_code;
///
/// // let bytecode = get_code("0x0", "https://eth.llamarpc.com").await;
/// // assert!(bytecode.is_ok());
/// ```
pub async fn get_code(contract_address: &str, rpc_url: &str) -> Result<Vec<u8>, Error> {
    debug!("fetching bytecode from node for contract: '{}'", &contract_address);
    let address = Address::from_str(contract_address).map_err(|_| {
        Error::ParseError(format!("invalid contract address '{}'", &contract_address))
    })?;

    let provider = MultiTransportProvider::connect(rpc_url)
        .await
        .map_err(|_| Error::RpcError(format!("failed to connect to provider '{}'", &rpc_url)))?;
    provider
        .get_code_at(address)
        .await
        .map_err(|e| Error::RpcError(format!("failed to get account code: {e}")))
}

#[cfg(test)]
pub mod tests {
    use crate::ether::rpc::*;

    #[tokio::test]
    async fn test_chain_id() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            println!("RPC_URL not set, skipping test");
            std::process::exit(0);
        });

        let rpc_chain_id = chain_id(&rpc_url).await.expect("chain_id() returned an error!");

        assert_eq!(rpc_chain_id, 1);
    }

    #[tokio::test]
    async fn test_chain_id_invalid_rpc_url() {
        let rpc_url = "https://none.llamarpc.com";
        let rpc_chain_id = chain_id(rpc_url).await;

        assert!(rpc_chain_id.is_err())
    }

    #[tokio::test]
    async fn test_get_code() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            println!("RPC_URL not set, skipping test");
            std::process::exit(0);
        });

        let contract_address = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
        let bytecode =
            get_code(contract_address, &rpc_url).await.expect("get_code() returned an error!");

        assert!(!bytecode.is_empty());
    }

    #[tokio::test]
    async fn test_get_code_invalid_contract_address() {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| {
            println!("RPC_URL not set, skipping test");
            std::process::exit(0);
        });

        let contract_address = "0x0";
        let bytecode = get_code(contract_address, &rpc_url).await;

        assert!(bytecode.is_err())
    }
}
