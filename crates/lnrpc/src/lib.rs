//! Message types and client stubs for the subset of the LND gRPC api used by the proxy.
//!
//! Messages serialize with serde in the protobuf JSON shape: lowerCamelCase field names,
//! 64-bit integers as decimal strings and bytes as standard base64. Every field is emitted,
//! including default values.

pub mod lnrpc;
pub mod routerrpc;
mod serde_helpers;

pub use lnrpc::lightning_client::LightningClient;
pub use routerrpc::router_client::RouterClient;
