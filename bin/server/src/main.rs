use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;
use connector::{transport::install_crypto_provider, ConnectorConfig, LndConnector, NodeConfig};
use lnd_graph_proxy_server::{api_route, describe_metrics};
use poem::{listener::TcpListener, middleware::Tracing, EndpointExt as _, Server};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// A HTTP proxy forwarding read-only queries to LND nodes over authenticated gRPC.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TCP address for serving the HTTP api
    #[arg(env, long, default_value = "0.0.0.0:5000")]
    http_listener: SocketAddr,

    /// INI file with per-node sections, a `host` key overrides the default address
    #[arg(env, long, default_value = "./config/nodes.ini")]
    nodes_config: PathBuf,

    /// Directory holding <node>.cert and <node>.macaroon
    #[arg(env, long, default_value = "./auth")]
    auth_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let args: Args = Args::parse();
    tracing_subscriber::registry().with(fmt::layer()).with(EnvFilter::from_default_env()).init();

    install_crypto_provider();
    describe_metrics();

    let nodes = NodeConfig::load(&args.nodes_config)?;
    log::info!("loaded {} node sections from {}", nodes.len(), args.nodes_config.display());
    let connector = Arc::new(LndConnector::new(ConnectorConfig {
        credential_dir: args.auth_dir,
        nodes,
    }));

    let app = api_route().data(connector).with(Tracing);

    log::info!("serving http api on {}", args.http_listener);
    Server::new(TcpListener::bind(args.http_listener)).name("lnd-graph-proxy").run(app).await?;
    Ok(())
}
