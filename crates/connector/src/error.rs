use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;
use tonic::{Code, Status};

use crate::{NodeId, RpcMethod, ServiceKind};

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("node id {node:?} cannot name a credential file")]
    InvalidNodeId { node: NodeId },
    #[error("credential for node {node} not found at {}", path.display())]
    CredentialNotFound { node: NodeId, path: PathBuf },
    #[error("read credential {} failed: {source}", path.display())]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("secure connection to {address} could not be set up: {reason}")]
    ConnectionSetup { address: String, reason: String },
    #[error("{method} tls handshake failed: {message}")]
    Handshake { method: RpcMethod, message: String },
    #[error("{method} failed with {code:?}: {message}")]
    Rpc { method: RpcMethod, code: Code, message: String },
    #[error("{method} is not served by {service}")]
    ServiceMismatch { method: RpcMethod, service: ServiceKind },
    #[error("response conversion failed: {0}")]
    Serialization(String),
}

impl ConnectorError {
    pub(crate) fn setup(address: &str, reason: impl Into<String>) -> Self {
        Self::ConnectionSetup {
            address: address.to_owned(),
            reason: reason.into(),
        }
    }

    /// Statuses produced locally by the channel carry the transport error as source.
    /// Only a TLS failure in that chain is a handshake error, anything else (refused,
    /// reset, dns) stays an rpc error with the status code of the channel.
    pub fn from_status(method: RpcMethod, status: Status) -> Self {
        let mut message = status.message().to_owned();
        let mut tls_failure = false;
        let mut source = status.source();
        while let Some(err) = source {
            tls_failure |= is_tls_error(err);
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }

        if tls_failure {
            Self::Handshake { method, message }
        } else {
            Self::Rpc {
                method,
                code: status.code(),
                message,
            }
        }
    }
}

/// tokio-rustls reports handshake failures as an `io::Error` wrapping the rustls error,
/// and `io::Error::source` skips the wrapped value, so it is checked explicitly.
fn is_tls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.downcast_ref::<rustls::Error>().is_some() {
        return true;
    }
    err.downcast_ref::<io::Error>()
        .and_then(|io_err| io_err.get_ref())
        .is_some_and(|inner| inner.downcast_ref::<rustls::Error>().is_some())
}
