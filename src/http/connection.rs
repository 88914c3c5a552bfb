use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::files::StaticFiles;
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection<'a, S> {
    stream: S,
    files: &'a StaticFiles,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Routing(Request),
    Responding(Request, Response),
    Closed,
}

impl<'a, S> Connection<'a, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, files: &'a StaticFiles, read_buffer_size: usize) -> Self {
        Self {
            stream,
            files,
            buffer: BytesMut::with_capacity(read_buffer_size),
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request and response.
    ///
    /// The stream is consumed, so it is closed when this returns, including
    /// when an error is returned part way through.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Routing(req),
                        // Peer closed before sending anything
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Routing(req) => {
                    let response = self.files.respond(&req).await;
                    self.state = ConnectionState::Responding(req, response);
                }

                ConnectionState::Responding(req, response) => {
                    let writer = ResponseWriter::new(&response);
                    writer.write_to_stream(&mut self.stream).await?;

                    tracing::info!(
                        method = %req.method,
                        uri = req.path(),
                        status = response.status.as_u16(),
                        bytes = response.body.len(),
                        "Request handled"
                    );
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single bounded read and parses the request line from it.
    ///
    /// Returns `None` when the peer sent nothing.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let n = self.stream.read_buf(&mut self.buffer).await?;

        if n == 0 {
            return Ok(None);
        }

        let request = parse_request_line(&self.buffer)?;
        Ok(Some(request))
    }
}
