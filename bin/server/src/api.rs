use std::{sync::Arc, time::Instant};

use connector::{Code, ConnectorError, LndConnector, NodeId, QueryResult, RpcMethod};
use metrics::{counter, histogram};
use poem::{
    error::ResponseError,
    get, handler,
    http::StatusCode,
    web::{Data, Html, Json, Path},
    Route,
};

use crate::{METRICS_QUERY_COUNT, METRICS_QUERY_ERROR_COUNT, METRICS_QUERY_HISTOGRAM};

pub const HEALTH_BODY: &str = "<p>Yep, I'm here!</p>";

/// Maps connector failures to status codes, the body is the error text.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] ConnectorError);

impl ResponseError for ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            ConnectorError::InvalidNodeId { .. } => StatusCode::BAD_REQUEST,
            ConnectorError::CredentialNotFound { .. } => StatusCode::NOT_FOUND,
            ConnectorError::CredentialRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ConnectorError::ConnectionSetup { .. } | ConnectorError::Handshake { .. } => StatusCode::BAD_GATEWAY,
            ConnectorError::Rpc { code, .. } => match code {
                Code::Unauthenticated => StatusCode::UNAUTHORIZED,
                Code::PermissionDenied => StatusCode::FORBIDDEN,
                Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::BAD_GATEWAY,
            },
            ConnectorError::ServiceMismatch { .. } | ConnectorError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Query routes plus health. The caller attaches the [`LndConnector`] with `.data()`.
pub fn api_route() -> Route {
    Route::new()
        .at("/health", get(health))
        .at("/info/:node", get(node_info))
        .at("/graph/:node", get(node_graph))
        .at("/mission-control/:node", get(node_mission_control))
}

#[handler]
async fn health() -> Html<&'static str> {
    Html(HEALTH_BODY)
}

#[handler]
async fn node_info(Path(node): Path<String>, Data(connector): Data<&Arc<LndConnector>>) -> poem::Result<Json<QueryResult>> {
    run_query(connector, node, RpcMethod::GetInfo).await
}

#[handler]
async fn node_graph(Path(node): Path<String>, Data(connector): Data<&Arc<LndConnector>>) -> poem::Result<Json<QueryResult>> {
    run_query(connector, node, RpcMethod::DescribeGraph).await
}

#[handler]
async fn node_mission_control(Path(node): Path<String>, Data(connector): Data<&Arc<LndConnector>>) -> poem::Result<Json<QueryResult>> {
    run_query(connector, node, RpcMethod::QueryMissionControl).await
}

async fn run_query(connector: &LndConnector, node: String, method: RpcMethod) -> poem::Result<Json<QueryResult>> {
    counter!(METRICS_QUERY_COUNT, "method" => method.name()).increment(1);
    let started = Instant::now();
    let node = NodeId::from(node);
    match connector.query(&node, method).await {
        Ok(result) => {
            histogram!(METRICS_QUERY_HISTOGRAM, "method" => method.name()).record(started.elapsed().as_millis() as f64 / 1000.0);
            Ok(Json(result))
        }
        Err(e) => {
            log::warn!("[HttpApi] {method} for node {node} rejected: {e}");
            counter!(METRICS_QUERY_ERROR_COUNT, "method" => method.name()).increment(1);
            Err(ApiError::from(e).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use connector::{ConnectorConfig, NodeConfig};
    use poem::{test::TestClient, EndpointExt};
    use test_log::test;

    use super::*;

    fn app(dir: &std::path::Path) -> impl poem::Endpoint {
        let connector = Arc::new(LndConnector::new(ConnectorConfig {
            credential_dir: dir.to_path_buf(),
            nodes: NodeConfig::default(),
        }));
        api_route().data(connector)
    }

    #[test(tokio::test)]
    async fn health_does_not_touch_nodes() {
        let dir = tempfile::tempdir().unwrap();
        let cli = TestClient::new(app(&dir.path().join("missing")));
        let resp = cli.get("/health").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(HEALTH_BODY).await;
    }

    #[test(tokio::test)]
    async fn missing_credentials_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bob.cert"), b"cert").unwrap();
        let cli = TestClient::new(app(dir.path()));

        let resp = cli.get("/info/bob").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        let resp = cli.get("/mission-control/bob").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[test(tokio::test)]
    async fn node_id_escaping_auth_dir_is_bad_request() {
        let root = tempfile::tempdir().unwrap();
        let auth = root.path().join("auth");
        fs::create_dir(&auth).unwrap();
        fs::write(root.path().join("x.cert"), b"cert").unwrap();
        fs::write(root.path().join("x.macaroon"), [0x02]).unwrap();
        let cli = TestClient::new(app(&auth));

        let resp = cli.get("/info/..%2Fx").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test(tokio::test)]
    async fn bad_certificate_is_bad_gateway() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lnd.cert"), b"garbage").unwrap();
        fs::write(dir.path().join("lnd.macaroon"), [0x02, 0x01]).unwrap();
        let cli = TestClient::new(app(dir.path()));

        let resp = cli.get("/graph/lnd").send().await;
        resp.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn rpc_codes_map_to_statuses() {
        let status = |code| {
            ApiError(ConnectorError::Rpc {
                method: RpcMethod::GetInfo,
                code,
                message: String::new(),
            })
            .status()
        };
        assert_eq!(status(Code::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status(Code::PermissionDenied), StatusCode::FORBIDDEN);
        assert_eq!(status(Code::Unavailable), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status(Code::DeadlineExceeded), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(status(Code::Internal), StatusCode::BAD_GATEWAY);
    }
}
