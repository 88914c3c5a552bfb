use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpStream;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::headers::Headers;
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::resolver::{self, Lookup};
use crate::http::response::Response;
use crate::server::Service;

/// Serves files from a document root.
///
/// Holds only immutable state, so one instance is shared by every
/// connection.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    defaults: Headers,
    read_buffer_size: usize,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>, server_name: &str) -> Self {
        Self {
            root: root.into(),
            defaults: Headers::defaults(server_name),
            read_buffer_size: 1024,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.static_files.root, &cfg.server.server_name)
            .with_read_buffer_size(cfg.server.read_buffer_size)
    }

    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn defaults(&self) -> &Headers {
        &self.defaults
    }

    /// Routes a request to the response it deserves.
    pub async fn respond(&self, req: &Request) -> Response {
        match req.method() {
            Method::Get => self.get(req).await,
            Method::Post => Response::method_not_allowed(&self.defaults),
            Method::Other => Response::not_implemented(&self.defaults),
        }
    }

    async fn get(&self, req: &Request) -> Response {
        match resolver::locate(&self.root, req.uri.as_deref()).await {
            Lookup::File(path) => match self.read_file(&path).await {
                Ok(response) => response,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to read file");
                    Response::internal_error(&self.defaults)
                }
            },
            Lookup::Forbidden(path) => {
                warn!(uri = req.path(), path = %path.display(), "Path escapes document root");
                Response::forbidden(&self.defaults)
            }
            Lookup::NotFound(path) => {
                info!(uri = req.path(), path = %path.display(), "File not found");
                Response::not_found(&self.defaults)
            }
            Lookup::Error(path, e) => {
                error!(path = %path.display(), error = %e, "Failed to inspect file");
                Response::internal_error(&self.defaults)
            }
        }
    }

    async fn read_file(&self, path: &Path) -> std::io::Result<Response> {
        let contents = tokio::fs::read(path).await?;
        let content_type = mime::content_type_for(path);

        Response::file(&self.defaults, &content_type, contents)
    }
}

impl Service for StaticFiles {
    async fn call(&self, stream: TcpStream, peer: SocketAddr) -> anyhow::Result<()> {
        tracing::debug!(peer = %peer, "Handling connection");
        Connection::new(stream, self, self.read_buffer_size)
            .run()
            .await
    }
}
