//! Builds an authenticated gRPC connection to an LND node from its id and forwards
//! read-only queries over it.
//!
//! Every query resolves the endpoint, reads the credentials and builds a fresh
//! connection. Nothing is shared between requests, so rotated credentials take effect
//! on the next call and a failing node never affects the others.

use std::{path::PathBuf, sync::Arc};

mod client;
mod connection;
mod credentials;
mod endpoint;
mod error;
mod node;
mod node_config;
mod query;
#[cfg(test)]
mod test_utils;
pub mod transport;

pub use client::{RpcClient, ServiceKind, MAX_DECODING_MESSAGE_SIZE};
pub use connection::{create_secure_connection, AuthedChannel, MacaroonInterceptor, SecureConnection, MACAROON_METADATA_KEY};
pub use credentials::{CredentialLoader, CredentialPair};
pub use endpoint::{EndpointResolver, DEFAULT_RPC_PORT};
pub use error::ConnectorError;
pub use node::NodeId;
pub use node_config::{ConfigError, NodeConfig, NodeSection};
pub use query::{invoke, to_query_result, QueryResult, RpcInvoker, RpcMethod, RpcResponse};
pub use tonic::Code;

pub struct ConnectorConfig {
    /// Directory holding `<node>.cert` and `<node>.macaroon`.
    pub credential_dir: PathBuf,
    pub nodes: NodeConfig,
}

pub struct LndConnector {
    resolver: EndpointResolver,
    credentials: CredentialLoader,
}

impl LndConnector {
    pub fn new(cfg: ConnectorConfig) -> Self {
        transport::install_crypto_provider();
        Self {
            resolver: EndpointResolver::new(Arc::new(cfg.nodes)),
            credentials: CredentialLoader::new(cfg.credential_dir),
        }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Credentials are loaded before anything network related happens, a missing file
    /// means no connection attempt at all.
    pub async fn connect(&self, node: &NodeId) -> Result<SecureConnection, ConnectorError> {
        let address = self.resolver.resolve(node);
        let credentials = self.credentials.load(node).await?;
        log::info!("[LndConnector] connecting node {node} at {address}");
        create_secure_connection(address, credentials)
    }

    pub async fn query(&self, node: &NodeId, method: RpcMethod) -> Result<QueryResult, ConnectorError> {
        let connection = self.connect(node).await?;
        let mut client = RpcClient::for_service(&connection, method.service());
        match invoke(&mut client, method).await {
            Ok(result) => {
                log::info!("[LndConnector] {method} on node {node} done");
                Ok(result)
            }
            Err(e) => {
                log::warn!("[LndConnector] {method} on node {node} at {} failed: {e}", connection.address());
                Err(e)
            }
        }
    }
}
