use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::config::{self, ServerConfig};
use crate::server::service::Service;

/// Binds the listening socket with address reuse and the configured backlog.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to resolve {}", cfg.listen_addr))?
        .next()
        .with_context(|| format!("no address found for {}", cfg.listen_addr))?;

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket
        .listen(cfg.backlog)
        .with_context(|| format!("failed to listen on {}", addr))?;

    Ok(listener)
}

/// Accepts connections forever, running `service` on a task per connection.
///
/// With `max_connections` set, no new connection is accepted while that many
/// are still being handled. A limit of zero is rejected up front; after that
/// only an accept failure ends the loop.
pub async fn serve<S: Service>(
    listener: TcpListener,
    service: Arc<S>,
    max_connections: Option<usize>,
) -> anyhow::Result<()> {
    config::check_max_connections(max_connections)?;
    let limit = max_connections.map(|n| Arc::new(Semaphore::new(n)));

    info!("Listening on {}", listener.local_addr()?);

    loop {
        let permit = match &limit {
            Some(sem) => Some(sem.clone().acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let service = service.clone();
        tokio::spawn(async move {
            if let Err(e) = service.call(socket, peer).await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            drop(permit);
        });
    }
}

pub async fn run<S: Service>(cfg: &ServerConfig, service: Arc<S>) -> anyhow::Result<()> {
    cfg.validate()?;
    let listener = bind(cfg).await?;
    serve(listener, service, cfg.max_connections).await
}
