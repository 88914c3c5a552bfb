use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpStream;

/// Handles one accepted connection.
///
/// The accept loop knows nothing about the protocol spoken on the socket; it
/// hands every stream to a `Service` on its own task. The service owns the
/// stream for the rest of the connection and the socket is closed when the
/// returned future completes, whether or not it succeeded.
pub trait Service: Send + Sync + 'static {
    fn call(
        &self,
        stream: TcpStream,
        peer: SocketAddr,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
