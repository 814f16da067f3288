// Messages and client for the `routerrpc.Router` sub-server. Only the parameterless
// mission control query is bound here. Pinned to router.proto of lnd v0.18, unknown
// fields of newer releases are dropped on decode.

#[derive(serde::Serialize)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryMissionControlRequest {}
/// QueryMissionControlResponse contains mission control state.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryMissionControlResponse {
    /// Node pair-level mission control state.
    #[prost(message, repeated, tag = "2")]
    pub pairs: ::prost::alloc::vec::Vec<PairHistory>,
}
/// PairHistory contains the mission control state for a particular node pair.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PairHistory {
    /// The source node pubkey of the pair.
    #[prost(bytes = "vec", tag = "1")]
    #[serde(serialize_with = "crate::serde_helpers::as_base64")]
    pub node_from: ::prost::alloc::vec::Vec<u8>,
    /// The destination node pubkey of the pair.
    #[prost(bytes = "vec", tag = "2")]
    #[serde(serialize_with = "crate::serde_helpers::as_base64")]
    pub node_to: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub history: ::core::option::Option<PairData>,
}
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PairData {
    /// Time of last failure.
    #[prost(int64, tag = "1")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub fail_time: i64,
    /// Lowest amount that failed to forward rounded to whole sats. This may be
    /// set to zero if the failure is independent of amount.
    #[prost(int64, tag = "2")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub fail_amt_sat: i64,
    #[prost(int64, tag = "4")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub fail_amt_msat: i64,
    /// Time of last success.
    #[prost(int64, tag = "5")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub success_time: i64,
    /// Highest amount that we could successfully forward rounded to whole sats.
    #[prost(int64, tag = "6")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub success_amt_sat: i64,
    #[prost(int64, tag = "7")]
    #[serde(serialize_with = "crate::serde_helpers::as_string")]
    pub success_amt_msat: i64,
}
/// Generated client implementations.
pub mod router_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::wildcard_imports, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    /// Router is a service that offers advanced interaction with the router
    /// subsystem of the daemon.
    #[derive(Debug, Clone)]
    pub struct RouterClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> RouterClient<T>
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
        pub fn with_interceptor<F>(inner: T, interceptor: F) -> RouterClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<http::Request<tonic::body::BoxBody>, Response = http::Response<<T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody>>,
            <T as tonic::codegen::Service<http::Request<tonic::body::BoxBody>>>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            RouterClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// QueryMissionControl exposes the internal mission control state to callers.
        /// It is a development feature.
        pub async fn query_mission_control(
            &mut self,
            request: impl tonic::IntoRequest<super::QueryMissionControlRequest>,
        ) -> std::result::Result<tonic::Response<super::QueryMissionControlResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/routerrpc.Router/QueryMissionControl");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("routerrpc.Router", "QueryMissionControl"));
            self.inner.unary(req, path, codec).await
        }
    }
}
