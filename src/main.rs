//! Process entry point: configuration, listener bind, accept loop.

use gamehost::api::ApiRouter;
use gamehost::cachebust::CacheBust;
use gamehost::config::ServerConfig;
use gamehost::dispatch::{self, AppState};
use gamehost::logger;
use gamehost::static_files::{StaticAssets, DEFAULT_ASSET_ROOT};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = resolve_bind_addr(&config).await?;
    // Bind failure is fatal: nothing is served and the reporter stays silent
    let listener = create_listener(addr)?;

    let cachebust = CacheBust::generate();
    logger::log_server_start(&config, &cachebust);

    let state = Arc::new(AppState {
        assets: StaticAssets::new(DEFAULT_ASSET_ROOT),
        api: ApiRouter::new(),
    });

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection in a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| dispatch::handle_request(req, Arc::clone(&state))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Resolve the configured host and port to a bindable socket address.
///
/// The default host is the name `localhost`, so this goes through the
/// resolver rather than parsing an address literal.
async fn resolve_bind_addr(
    config: &ServerConfig,
) -> Result<SocketAddr, Box<dyn std::error::Error>> {
    tokio::net::lookup_host((config.host.as_str(), config.port))
        .await?
        .next()
        .ok_or_else(|| format!("No address found for host '{}'", config.host).into())
}

/// Create a TcpListener with SO_REUSEADDR enabled.
///
/// SO_REUSEADDR allows rebinding a port still in TIME_WAIT after a
/// quick restart, which is the common cycle while iterating on the
/// bundle.
fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
