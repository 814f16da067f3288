use std::sync::Arc;

use crate::{NodeConfig, NodeId};

/// Standard port of the LND gRPC interface.
pub const DEFAULT_RPC_PORT: u16 = 10009;

/// Maps a node id to the address its gRPC interface listens on.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    nodes: Arc<NodeConfig>,
}

impl EndpointResolver {
    pub fn new(nodes: Arc<NodeConfig>) -> Self {
        Self { nodes }
    }

    /// Configured `host` wins verbatim, otherwise `<node>:10009`. The result is not
    /// validated here, a bad address fails when the connection is built.
    pub fn resolve(&self, node: &NodeId) -> String {
        match self.nodes.section(node).and_then(|section| section.host.as_ref()) {
            Some(host) => {
                log::debug!("[EndpointResolver] node {node} configured with host {host}");
                host.clone()
            }
            None => {
                let address = format!("{node}:{DEFAULT_RPC_PORT}");
                log::debug!("[EndpointResolver] node {node} not configured, using {address}");
                address
            }
        }
    }
}
