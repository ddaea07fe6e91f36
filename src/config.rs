use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::server::AcceptPolicy;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8002";

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_VAR: &str = "STATICD_CONFIG";
pub const LISTEN_VAR: &str = "LISTEN";
pub const ACCEPT_POLICY_VAR: &str = "ACCEPT_POLICY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: String,
    pub on_accept_error: AcceptPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            on_accept_error: AcceptPolicy::default(),
        }
    }
}

impl Config {
    /// Loads the config file named by `STATICD_CONFIG`, if any, then applies
    /// the `LISTEN` and `ACCEPT_POLICY` overrides from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(LISTEN_VAR) {
            self.listen_addr = addr;
        }

        if let Some(policy) = lookup(ACCEPT_POLICY_VAR) {
            self.on_accept_error = policy
                .parse()
                .with_context(|| format!("invalid {}", ACCEPT_POLICY_VAR))?;
        }

        Ok(())
    }
}
