use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::http::loader::ContentLoader;
use crate::http::mime::MimeTable;
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Request;
use crate::http::resolve::{Resolved, resolve};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on what a single receive reads from the client.
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

pub struct Connection<S> {
    stream: S,
    mimes: Arc<MimeTable>,
    loader: ContentLoader,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    AwaitingRequest,
    ParsingLine(Bytes),
    Resolving(Request),
    Responding(Reply),
    Closed,
}

/// What the connection answers with once the request line is understood.
#[derive(Debug)]
pub enum Reply {
    File(Resolved),
    Malformed(ParseError),
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, mimes: Arc<MimeTable>, loader: ContentLoader) -> Self {
        Self {
            stream,
            mimes,
            loader,
            state: ConnectionState::AwaitingRequest,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Serves exactly one request, then closes.
    ///
    /// The stream is shut down on every exit path. Receive and send failures
    /// are returned after the connection is closed; nothing is retried.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        self.state = ConnectionState::Closed;
        if let Err(e) = self.stream.shutdown().await {
            debug!("shutdown after response failed: {}", e);
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);
            debug!(?state, "connection state");

            self.state = match state {
                ConnectionState::AwaitingRequest => match self.receive().await? {
                    Some(bytes) => ConnectionState::ParsingLine(bytes),
                    None => {
                        info!("client closed connection before sending a request");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::ParsingLine(bytes) => match parse_request_line(&bytes) {
                    Ok(req) => ConnectionState::Resolving(req),
                    Err(e) => {
                        warn!("rejecting request: {}", e);
                        ConnectionState::Responding(Reply::Malformed(e))
                    }
                },

                ConnectionState::Resolving(req) => {
                    if req.has_parent_segment() {
                        warn!(path = %req.path, "request path contains a parent segment");
                    }
                    let resolved = resolve(&req.path, &self.mimes);
                    debug!(
                        method = %req.method,
                        path = %req.path,
                        fs_path = %resolved.fs_path,
                        mime = resolved.mime_type,
                        "resolved request"
                    );
                    ConnectionState::Responding(Reply::File(resolved))
                }

                ConnectionState::Responding(reply) => {
                    let response = self.build_response(reply).await;
                    let mut writer = ResponseWriter::new(&response);
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to send response")?;

                    info!(
                        status = response.status.as_u16(),
                        content_type = %response.mime_type,
                        bytes = writer.len(),
                        "response sent"
                    );
                    ConnectionState::Closed
                }

                ConnectionState::Closed => return Ok(()),
            };
        }
    }

    /// Performs the single receive for this connection.
    ///
    /// Returns `None` when the peer closed without sending anything.
    async fn receive(&mut self) -> anyhow::Result<Option<Bytes>> {
        let mut temp = [0u8; RECEIVE_BUFFER_SIZE];
        let n = self
            .stream
            .read(&mut temp)
            .await
            .context("failed to receive request")?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(Bytes::copy_from_slice(&temp[..n])))
    }

    async fn build_response(&self, reply: Reply) -> Response {
        match reply {
            Reply::File(resolved) => match self.loader.load(&resolved.fs_path).await {
                Ok(body) => Response::ok(resolved.mime_type, body),
                Err(e) => {
                    warn!(path = %e.path, error = %e.source, "could not load file");
                    Response::not_found(e.to_string())
                }
            },
            Reply::Malformed(e) => Response::not_found(e.to_string()),
        }
    }
}
