use std::fmt::Display;

use lnrpc::{
    lnrpc::{ChannelGraph, ChannelGraphRequest, GetInfoRequest, GetInfoResponse},
    routerrpc::{QueryMissionControlRequest, QueryMissionControlResponse},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tonic::Status;

use crate::{ConnectorError, RpcClient, ServiceKind};

/// Response converted to an ordered JSON object, field for field.
pub type QueryResult = Map<String, Value>;

/// The read-only, parameterless calls the proxy forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    GetInfo,
    DescribeGraph,
    QueryMissionControl,
}

impl RpcMethod {
    pub fn service(&self) -> ServiceKind {
        match self {
            Self::GetInfo | Self::DescribeGraph => ServiceKind::Lightning,
            Self::QueryMissionControl => ServiceKind::Router,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetInfo => "GetInfo",
            Self::DescribeGraph => "DescribeGraph",
            Self::QueryMissionControl => "QueryMissionControl",
        }
    }
}

impl Display for RpcMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Info(GetInfoResponse),
    Graph(ChannelGraph),
    MissionControl(QueryMissionControlResponse),
}

/// Something able to issue the unary calls of one service.
#[async_trait::async_trait]
pub trait RpcInvoker: Send {
    fn service(&self) -> ServiceKind;
    async fn unary(&mut self, method: RpcMethod) -> Result<RpcResponse, Status>;
}

#[async_trait::async_trait]
impl RpcInvoker for RpcClient {
    fn service(&self) -> ServiceKind {
        RpcClient::service(self)
    }

    async fn unary(&mut self, method: RpcMethod) -> Result<RpcResponse, Status> {
        match (self, method) {
            (RpcClient::Lightning(client), RpcMethod::GetInfo) => Ok(RpcResponse::Info(client.get_info(GetInfoRequest {}).await?.into_inner())),
            (RpcClient::Lightning(client), RpcMethod::DescribeGraph) => Ok(RpcResponse::Graph(client.describe_graph(ChannelGraphRequest::default()).await?.into_inner())),
            (RpcClient::Router(client), RpcMethod::QueryMissionControl) => Ok(RpcResponse::MissionControl(client.query_mission_control(QueryMissionControlRequest {}).await?.into_inner())),
            (client, method) => Err(Status::unimplemented(format!("{method} is not served by {}", client.service()))),
        }
    }
}

/// Issues `method` once and converts the response. Failures are returned as they are,
/// there is no retry.
pub async fn invoke<C: RpcInvoker + ?Sized>(client: &mut C, method: RpcMethod) -> Result<QueryResult, ConnectorError> {
    if client.service() != method.service() {
        return Err(ConnectorError::ServiceMismatch {
            method,
            service: client.service(),
        });
    }
    let response = client.unary(method).await.map_err(|status| ConnectorError::from_status(method, status))?;
    to_query_result(&response)
}

pub fn to_query_result<T: Serialize>(response: &T) -> Result<QueryResult, ConnectorError> {
    match serde_json::to_value(response).map_err(|e| ConnectorError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ConnectorError::Serialization(format!("expected an object, got {other}"))),
    }
}
