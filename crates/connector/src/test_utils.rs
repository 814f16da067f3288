//! Certificates and a TLS gRPC node serving `lnrpc.Lightning/GetInfo`.

use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::Duration,
};

use lnrpc::lnrpc::{GetInfoRequest, GetInfoResponse};
use tokio::task::JoinHandle;
use tonic::{
    codec::ProstCodec,
    codegen::{empty_body, http, Body, BoxFuture, Service, StdError},
    server::{Grpc, NamedService, UnaryService},
    transport::{Identity, Server, ServerTlsConfig},
    Code, Request, Response, Status,
};

use crate::MACAROON_METADATA_KEY;

pub struct NodeIdentity {
    pub cert_pem: String,
    pub key_pem: String,
}

pub fn node_identity() -> NodeIdentity {
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string(), "lnd".to_string()]).expect("should generate cert");
    NodeIdentity {
        cert_pem: certified.cert.pem(),
        key_pem: certified.key_pair.serialize_pem(),
    }
}

pub fn node_cert_pem() -> Vec<u8> {
    node_identity().cert_pem.into_bytes()
}

#[derive(Clone)]
struct LightningNode {
    info: GetInfoResponse,
    macaroons: Arc<Mutex<Vec<Option<String>>>>,
}

impl NamedService for LightningNode {
    const NAME: &'static str = "lnrpc.Lightning";
}

struct GetInfoCall(LightningNode);

impl UnaryService<GetInfoRequest> for GetInfoCall {
    type Response = GetInfoResponse;
    type Future = BoxFuture<Response<GetInfoResponse>, Status>;

    fn call(&mut self, request: Request<GetInfoRequest>) -> Self::Future {
        let macaroon = request.metadata().get(MACAROON_METADATA_KEY).and_then(|value| value.to_str().ok()).map(str::to_owned);
        self.0.macaroons.lock().expect("should lock").push(macaroon);
        let info = self.0.info.clone();
        Box::pin(async move { Ok(Response::new(info)) })
    }
}

impl<B> Service<http::Request<B>> for LightningNode
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let node = self.clone();
        match req.uri().path() {
            "/lnrpc.Lightning/GetInfo" => Box::pin(async move {
                let mut grpc = Grpc::new(ProstCodec::<GetInfoResponse, GetInfoRequest>::default());
                Ok(grpc.unary(GetInfoCall(node), req).await)
            }),
            _ => Box::pin(async move {
                let mut response = http::Response::new(empty_body());
                let headers = response.headers_mut();
                headers.insert(Status::GRPC_STATUS, (Code::Unimplemented as i32).into());
                headers.insert(http::header::CONTENT_TYPE, tonic::metadata::GRPC_CONTENT_TYPE);
                Ok(response)
            }),
        }
    }
}

/// Running node, stopped on drop.
pub struct LightningNodeHandle {
    pub port: u16,
    macaroons: Arc<Mutex<Vec<Option<String>>>>,
    task: JoinHandle<()>,
}

impl LightningNodeHandle {
    /// `macaroon` metadata seen by the node, one entry per call.
    pub fn macaroons(&self) -> Vec<Option<String>> {
        self.macaroons.lock().expect("should lock").clone()
    }
}

impl Drop for LightningNodeHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub async fn spawn_lightning_node(identity: &NodeIdentity, info: GetInfoResponse) -> LightningNodeHandle {
    crate::transport::install_crypto_provider();
    let addr = std::net::TcpListener::bind("127.0.0.1:0").expect("should bind").local_addr().expect("should have addr");
    let macaroons = Arc::new(Mutex::new(Vec::new()));
    let node = LightningNode {
        info,
        macaroons: macaroons.clone(),
    };
    let tls = ServerTlsConfig::new().identity(Identity::from_pem(&identity.cert_pem, &identity.key_pem));
    let server = Server::builder().tls_config(tls).expect("should accept tls config").add_service(node);
    let task = tokio::spawn(async move {
        if let Err(e) = server.serve(addr).await {
            log::error!("[LightningNode] serve error {e}");
        }
    });

    for _ in 0..200 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    LightningNodeHandle {
        port: addr.port(),
        macaroons,
        task,
    }
}
