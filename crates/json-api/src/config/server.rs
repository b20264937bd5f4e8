//! Server Config

use clap::Args;

/// Port used when neither `SERVER_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 5000;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port [default: 5000]
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,

    /// Platform-assigned port, consulted when `--port` is unset
    #[arg(long = "fallback-port", env = "PORT", hide = true)]
    pub fallback_port: Option<u16>,
}

impl ServerRuntimeConfig {
    /// Port to bind: `--port`/`SERVER_PORT`, then `PORT`, then [`DEFAULT_PORT`].
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.or(self.fallback_port).unwrap_or(DEFAULT_PORT)
    }

    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port())
    }
}
