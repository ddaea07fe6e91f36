use std::io;
use std::net::SocketAddr;
use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::loader::ContentLoader;
use crate::http::mime::MimeTable;
use crate::server::{AcceptPolicy, ServerError};

/// A bound socket plus everything needed to answer its connections.
pub struct Listener {
    inner: TcpListener,
    mimes: Arc<MimeTable>,
    loader: ContentLoader,
    policy: AcceptPolicy,
}

impl Listener {
    pub async fn bind(addr: &str) -> Result<Self, ServerError> {
        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Self {
            inner,
            mimes: Arc::new(MimeTable::new()),
            loader: ContentLoader::current_dir(),
            policy: AcceptPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: AcceptPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_loader(mut self, loader: ContentLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Blocks until the next client connects.
    pub async fn accept_next(&self) -> io::Result<(TcpStream, SocketAddr)> {
        self.inner.accept().await
    }

    /// Runs the accept loop, one connection at a time.
    ///
    /// Each connection is served to completion before the next accept.
    /// Per-connection failures are logged; only an accept failure under
    /// [`AcceptPolicy::Fatal`] ends the loop.
    pub async fn serve(&self) -> Result<(), ServerError> {
        loop {
            let (socket, peer) = match self.accept_next().await {
                Ok(accepted) => accepted,
                Err(e) => match self.policy.on_error(&e) {
                    ControlFlow::Continue(()) => continue,
                    ControlFlow::Break(()) => return Err(ServerError::Accept(e)),
                },
            };
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, self.mimes.clone(), self.loader.clone());
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = Listener::bind(&cfg.listen_addr)
        .await?
        .with_policy(cfg.on_accept_error);
    info!("Listening on {}", listener.local_addr()?);

    listener.serve().await?;
    Ok(())
}
