use anyhow::Context;
use serde::Deserialize;

use crate::bus::{RAW_STATS_CHANNEL, STATS_CHANNEL};

/// Env var naming the TOML config file read by [`EmitterConfig::load`].
pub const CONFIG_ENV: &str = "PERF_EMITTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "perf-emitter.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmitterConfig {
    #[serde(default)]
    pub channels: ChannelConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    #[serde(default = "default_inbound")]
    pub inbound: String,
    #[serde(default = "default_outbound")]
    pub outbound: String,
}

fn default_inbound() -> String {
    RAW_STATS_CHANNEL.into()
}

fn default_outbound() -> String {
    STATS_CHANNEL.into()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            inbound: default_inbound(),
            outbound: default_outbound(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Reject construction without an event bus. On in debug builds, off in release builds.
    #[serde(default = "default_require_bus")]
    pub require_bus: bool,
}

fn default_require_bus() -> bool {
    cfg!(debug_assertions)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_bus: default_require_bus(),
        }
    }
}

impl EmitterConfig {
    /// Read the file named by `PERF_EMITTER_CONFIG` (or `perf-emitter.toml`).
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading emitter config {path}"))?;
        Self::load_from_str(&raw)
    }

    /// Every section is optional; missing channel names fall back to the
    /// `browser-performance-emitter:*` defaults before validation.
    pub fn load_from_str(raw: &str) -> anyhow::Result<Self> {
        let config: EmitterConfig = toml::from_str(raw).context("parsing emitter config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.channels.inbound.is_empty(),
            "channels.inbound must be non-empty"
        );
        anyhow::ensure!(
            !self.channels.outbound.is_empty(),
            "channels.outbound must be non-empty"
        );
        anyhow::ensure!(
            self.channels.inbound != self.channels.outbound,
            "channels.inbound and channels.outbound must differ, both are {:?}",
            self.channels.inbound
        );
        Ok(())
    }
}
