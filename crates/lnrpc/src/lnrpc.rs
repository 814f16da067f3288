// Messages and client for the `lnrpc.Lightning` service, limited to the read-only
// calls the proxy forwards. Tags follow lightning.proto of lnd v0.18. Fields added
// by later lnd releases are skipped by the decoder and missing from query results.

#[derive(serde::Serialize)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoRequest {}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoResponse {
    /// The version of the LND software that the node is running.
    #[prost(string, tag = "14")]
    pub version: ::prost::alloc::string::String,
    /// The SHA1 commit hash that the daemon is compiled with.
    #[prost(string, tag = "20")]
    pub commit_hash: ::prost::alloc::string::String,
    /// The identity pubkey of the current node.
    #[prost(string, tag = "1")]
    pub identity_pubkey: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub alias: ::prost::alloc::string::String,
    #[prost(string, tag = "17")]
    pub color: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub num_pending_channels: u32,
    #[prost(uint32, tag = "4")]
    pub num_active_channels: u32,
    #[prost(uint32, tag = "15")]
    pub num_inactive_channels: u32,
    #[prost(uint32, tag = "5")]
    pub num_peers: u32,
    #[prost(uint32, tag = "6")]
    pub block_height: u32,
    #[prost(string, tag = "8")]
    pub block_hash: ::prost::alloc::string::String,
    /// Timestamp of the block best known to the wallet.
    #[prost(int64, tag = "13")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub best_header_timestamp: i64,
    #[prost(bool, tag = "9")]
    pub synced_to_chain: bool,
    #[prost(bool, tag = "18")]
    pub synced_to_graph: bool,
    /// Deprecated upstream, kept so responses from older nodes stay complete.
    #[prost(bool, tag = "10")]
    pub testnet: bool,
    #[prost(message, repeated, tag = "16")]
    pub chains: ::prost::alloc::vec::Vec<Chain>,
    /// The URIs of the current node.
    #[prost(string, repeated, tag = "12")]
    pub uris: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Features that our node has advertised in our init message, node
    /// announcements and invoices.
    #[prost(btree_map = "uint32, message", tag = "19")]
    pub features: ::prost::alloc::collections::BTreeMap<u32, Feature>,
    #[prost(bool, tag = "21")]
    pub require_htlc_interceptor: bool,
    #[prost(bool, tag = "22")]
    pub store_final_htlc_resolutions: bool,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chain {
    /// Deprecated. The chain is always bitcoin.
    #[prost(string, tag = "1")]
    pub chain: ::prost::alloc::string::String,
    /// The network the node is on.
    #[prost(string, tag = "2")]
    pub network: ::prost::alloc::string::String,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub is_required: bool,
    #[prost(bool, tag = "4")]
    pub is_known: bool,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelGraphRequest {
    /// Whether unannounced channels are included in the response or not. If set,
    /// unannounced channels are included. Unannounced channels are both private
    /// channels, and public channels that are not yet announced to the network.
    #[prost(bool, tag = "1")]
    pub include_unannounced: bool,
}
/// Returns a new instance of the directed channel graph.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelGraph {
    /// The list of `LightningNode`s in this channel graph
    #[prost(message, repeated, tag = "1")]
    pub nodes: ::prost::alloc::vec::Vec<LightningNode>,
    /// The list of `ChannelEdge`s in this channel graph
    #[prost(message, repeated, tag = "2")]
    pub edges: ::prost::alloc::vec::Vec<ChannelEdge>,
}
/// An individual vertex/node within the channel graph. A node is
/// connected to other nodes by one or more channel edges emanating from it. As the
/// graph is directed, a node will also have an incoming edge attached to it for
/// each outgoing edge.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LightningNode {
    #[prost(uint32, tag = "1")]
    pub last_update: u32,
    #[prost(string, tag = "2")]
    pub pub_key: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub alias: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub addresses: ::prost::alloc::vec::Vec<NodeAddress>,
    #[prost(string, tag = "5")]
    pub color: ::prost::alloc::string::String,
    #[prost(btree_map = "uint32, message", tag = "6")]
    pub features: ::prost::alloc::collections::BTreeMap<u32, Feature>,
    /// Custom node announcement tlv records.
    #[prost(btree_map = "uint64, bytes", tag = "7")]
    #[serde(serialize_with = "crate::serde_helpers::as_base64_map")]
    pub custom_records: ::prost::alloc::collections::BTreeMap<u64, ::prost::alloc::vec::Vec<u8>>,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeAddress {
    #[prost(string, tag = "1")]
    pub network: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub addr: ::prost::alloc::string::String,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoutingPolicy {
    #[prost(uint32, tag = "1")]
    pub time_lock_delta: u32,
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub min_htlc: i64,
    #[prost(int64, tag = "3")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub fee_base_msat: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub fee_rate_milli_msat: i64,
    #[prost(bool, tag = "5")]
    pub disabled: bool,
    #[prost(uint64, tag = "6")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub max_htlc_msat: u64,
    #[prost(uint32, tag = "7")]
    pub last_update: u32,
    /// Custom channel update tlv records.
    #[prost(btree_map = "uint64, bytes", tag = "8")]
    #[serde(serialize_with = "crate::serde_helpers::as_base64_map")]
    pub custom_records: ::prost::alloc::collections::BTreeMap<u64, ::prost::alloc::vec::Vec<u8>>,
    #[prost(int32, tag = "9")]
    pub inbound_fee_base_msat: i32,
    #[prost(int32, tag = "10")]
    pub inbound_fee_rate_milli_msat: i32,
}
/// A fully authenticated channel along with all its unique attributes.
/// Once an authenticated channel announcement has been processed on the network,
/// then an instance of ChannelEdgeInfo encapsulating the channels attributes is
/// stored. The other portions relevant to routing policy of a channel are stored
/// within a ChannelEdgePolicy for each direction of the channel.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelEdge {
    /// The unique channel ID for the channel. The first 3 bytes are the block
    /// height, the next 3 the index within the block, and the last 2 bytes are the
    /// output index for the channel.
    #[prost(uint64, tag = "1")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub channel_id: u64,
    #[prost(string, tag = "2")]
    pub chan_point: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub last_update: u32,
    #[prost(string, tag = "4")]
    pub node1_pub: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub node2_pub: ::prost::alloc::string::String,
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub capacity: i64,
    #[prost(message, optional, tag = "7")]
    pub node1_policy: ::core::option::Option<RoutingPolicy>,
    #[prost(message, optional, tag = "8")]
    pub node2_policy: ::core::option::Option<RoutingPolicy>,
    /// Custom channel announcement tlv records.
    #[prost(btree_map = "uint64, bytes", tag = "9")]
    #[serde(serialize_with = "crate::serde_helpers::as_base64_map")]
    pub custom_records: ::prost::alloc::collections::BTreeMap<u64, ::prost::alloc::vec::Vec<u8>>,
}
/// Generated client implementations.
pub mod lightning_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    /// Lightning is the main RPC server of the daemon.
    #[derive(Debug, Clone)]
    pub struct LightningClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> LightningClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(inner: T, interceptor: F) -> LightningClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<http::Request<tonic::body::BoxBody>, Response = http::Response<<T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody>>,
            <T as tonic::codegen::Service<http::Request<tonic::body::BoxBody>>>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            LightningClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// GetInfo returns general information concerning the lightning node including
        /// it's identity pubkey, alias, the chains it is connected to, and information
        /// concerning the number of open+pending channels.
        pub async fn get_info(&mut self, request: impl tonic::IntoRequest<super::GetInfoRequest>) -> std::result::Result<tonic::Response<super::GetInfoResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/lnrpc.Lightning/GetInfo");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("lnrpc.Lightning", "GetInfo"));
            self.inner.unary(req, path, codec).await
        }
        /// DescribeGraph returns a description of the latest graph state from the
        /// point of view of the node. The graph information is partitioned into two
        /// components: all the nodes/vertexes, and all the edges that connect the
        /// vertexes themselves. As this is a directed graph, the edges also contain
        /// the node directional specific routing policy which includes: the time lock
        /// delta, fee information, etc.
        pub async fn describe_graph(&mut self, request: impl tonic::IntoRequest<super::ChannelGraphRequest>) -> std::result::Result<tonic::Response<super::ChannelGraph>, tonic::Status> {
            self.inner.ready().await.map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/lnrpc.Lightning/DescribeGraph");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("lnrpc.Lightning", "DescribeGraph"));
            self.inner.unary(req, path, codec).await
        }
    }
}
