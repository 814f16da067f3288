use std::{
    fmt::Debug,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{ConnectorError, NodeId};

pub const CERT_EXTENSION: &str = "cert";
pub const MACAROON_EXTENSION: &str = "macaroon";

/// TLS certificate of the node plus its macaroon, already hex encoded for the wire.
#[derive(Clone)]
pub struct CredentialPair {
    certificate: Vec<u8>,
    macaroon_hex: String,
}

impl CredentialPair {
    pub fn new(certificate: Vec<u8>, macaroon: &[u8]) -> Self {
        Self {
            certificate,
            macaroon_hex: hex::encode(macaroon),
        }
    }

    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }

    pub fn macaroon_hex(&self) -> &str {
        &self.macaroon_hex
    }
}

impl Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("certificate", &format_args!("{} bytes", self.certificate.len()))
            .field("macaroon_hex", &"<redacted>")
            .finish()
    }
}

/// Reads `<store>/<node>.cert` and `<store>/<node>.macaroon`. Nothing is cached, so a
/// rotated credential is picked up by the next request.
#[derive(Debug, Clone)]
pub struct CredentialLoader {
    store: PathBuf,
}

impl CredentialLoader {
    pub fn new(store: impl Into<PathBuf>) -> Self {
        Self { store: store.into() }
    }

    pub fn cert_path(&self, node: &NodeId) -> PathBuf {
        self.store.join(format!("{node}.{CERT_EXTENSION}"))
    }

    pub fn macaroon_path(&self, node: &NodeId) -> PathBuf {
        self.store.join(format!("{node}.{MACAROON_EXTENSION}"))
    }

    pub async fn load(&self, node: &NodeId) -> Result<CredentialPair, ConnectorError> {
        if !node.is_file_stem() {
            log::warn!("[CredentialLoader] rejected node id {node:?}");
            return Err(ConnectorError::InvalidNodeId { node: node.clone() });
        }
        let certificate = read_credential(node, &self.cert_path(node)).await?;
        let macaroon = read_credential(node, &self.macaroon_path(node)).await?;
        log::debug!("[CredentialLoader] loaded credentials for node {node} from {}", self.store.display());
        Ok(CredentialPair::new(certificate, &macaroon))
    }
}

async fn read_credential(node: &NodeId, path: &Path) -> Result<Vec<u8>, ConnectorError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("[CredentialLoader] credential {} for node {node} not found", path.display());
            Err(ConnectorError::CredentialNotFound {
                node: node.clone(),
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            log::error!("[CredentialLoader] read credential {} error: {source}", path.display());
            Err(ConnectorError::CredentialRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
