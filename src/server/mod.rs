//! Listening socket and accept loop.

pub mod listener;

use std::io;
use std::ops::ControlFlow;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, warn};

pub use listener::Listener;

/// Setup and accept-loop failures that end the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or listening on the configured address failed.
    #[error("failed to listen on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to accept connection")]
    Accept(#[source] io::Error),
}

/// What the accept loop does when `accept` fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptPolicy {
    /// Stop serving and return the error.
    #[default]
    Fatal,
    /// Log the error and keep accepting.
    Continue,
}

impl AcceptPolicy {
    /// Decides whether the accept loop survives `err`.
    pub fn on_error(&self, err: &io::Error) -> ControlFlow<()> {
        match self {
            AcceptPolicy::Fatal => {
                error!("accept failed, shutting down: {}", err);
                ControlFlow::Break(())
            }
            AcceptPolicy::Continue => {
                warn!("accept failed, continuing: {}", err);
                ControlFlow::Continue(())
            }
        }
    }
}

impl FromStr for AcceptPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(AcceptPolicy::Fatal),
            "continue" => Ok(AcceptPolicy::Continue),
            other => Err(anyhow::anyhow!(
                "unknown accept policy {:?} (expected \"fatal\" or \"continue\")",
                other
            )),
        }
    }
}
