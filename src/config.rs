// Configuration management

use crate::error::{Result, SysviewError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the static fragment emitted before the status board.
pub const START_HTML: &str = "sysview-start.html";

/// File name of the static fragment emitted after the status board.
pub const END_HTML: &str = "sysview-end.html";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listening address: an IP literal or "localhost".
    pub address: String,
    /// Listening port, 1-65535.
    pub port: u16,
    /// Directory holding the systemd unit files to report on.
    pub unit_dir: PathBuf,
    /// Directory holding the start/end HTML fragments.
    pub html_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 8080,
            unit_dir: PathBuf::from("/lib/systemd/system"),
            html_dir: PathBuf::from("/etc/sysview/html-css"),
        }
    }
}

impl Config {
    /// Get default config path: ~/.config/sysview/config.yaml
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("sysview").join("config.yaml"))
    }

    /// Load config from path, falling back to defaults if not found.
    ///
    /// The `address` and `port` environment variables override whatever the
    /// file provides. The result is validated before it is returned, so a
    /// `Config` in hand is always usable.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Self::default_path().unwrap_or_default());

        let mut config: Config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(address) = std::env::var("address") {
            config.address = address;
        }
        if let Ok(port) = std::env::var("port") {
            let port: i64 = port
                .parse()
                .map_err(|_| SysviewError::Config("Port must be a number".to_string()))?;
            if !(1..=65535).contains(&port) {
                return Err(SysviewError::Config(
                    "Port number must be between 1 and 65535".to_string(),
                )
                .into());
            }
            config.port = port as u16;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject unusable listening addresses and ports.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SysviewError::Config(
                "Port number must be between 1 and 65535".to_string(),
            )
            .into());
        }
        if self.address != "localhost" && self.address.parse::<std::net::IpAddr>().is_err() {
            return Err(SysviewError::Config(
                "Address must be a valid Internet Protocol (IP) address or localhost".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Socket string handed to the TCP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Static page fragments wrapped around the rendered status board.
///
/// Both files are read once at startup and held for the process lifetime;
/// request handling never touches the filesystem for them.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub start: String,
    pub end: String,
}

impl PageChrome {
    /// Read the start and end fragments from the configured directory.
    pub fn load(html_dir: &Path) -> Result<Self> {
        let start_path = html_dir.join(START_HTML);
        let start = std::fs::read_to_string(&start_path)
            .with_context(|| format!("Failed to read {}", start_path.display()))?;

        let end_path = html_dir.join(END_HTML);
        let end = std::fs::read_to_string(&end_path)
            .with_context(|| format!("Failed to read {}", end_path.display()))?;

        Ok(Self { start, end })
    }
}
