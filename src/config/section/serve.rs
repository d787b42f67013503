//! `[serve]` section configuration.
//!
//! Contains the local server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 5277                 # HTTP port number
//! root = "dist"               # Directory with the built portfolio
//! workers = 4                 # Request worker threads
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Local server settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve")]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    #[config(default = "127.0.0.1")]
    pub interface: IpAddr,

    /// HTTP port number.
    #[config(default = "5277", inline_doc)]
    pub port: u16,

    /// Directory served for every path that is not the contact endpoint.
    #[config(default = "dist", inline_doc)]
    pub root: PathBuf,

    /// Request worker threads.
    #[config(default = "4", inline_doc)]
    pub workers: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
            root: "dist".into(),
            workers: 4,
        }
    }
}

impl ServeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.workers == 0 {
            diag.error_with_hint(
                Self::FIELDS.workers,
                "at least one worker is required",
                "the default is 4",
            );
        }
    }
}
