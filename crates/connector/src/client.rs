use std::fmt::Display;

use lnrpc::{LightningClient, RouterClient};

use crate::{AuthedChannel, SecureConnection};

/// Full channel graphs of mainnet nodes are far above tonic's 4MB default.
pub const MAX_DECODING_MESSAGE_SIZE: usize = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Lightning,
    Router,
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::Lightning => f.write_str("lnrpc.Lightning"),
            ServiceKind::Router => f.write_str("routerrpc.Router"),
        }
    }
}

/// Typed client for one service over a [`SecureConnection`].
#[derive(Debug, Clone)]
pub enum RpcClient {
    Lightning(LightningClient<AuthedChannel>),
    Router(RouterClient<AuthedChannel>),
}

impl RpcClient {
    /// Never fails, connection problems surface on the first call.
    pub fn for_service(connection: &SecureConnection, kind: ServiceKind) -> Self {
        match kind {
            ServiceKind::Lightning => Self::Lightning(LightningClient::new(connection.authed_channel()).max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)),
            ServiceKind::Router => Self::Router(RouterClient::new(connection.authed_channel()).max_decoding_message_size(MAX_DECODING_MESSAGE_SIZE)),
        }
    }

    pub fn service(&self) -> ServiceKind {
        match self {
            Self::Lightning(_) => ServiceKind::Lightning,
            Self::Router(_) => ServiceKind::Router,
        }
    }
}
