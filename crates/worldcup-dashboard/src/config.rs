use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port, matching the usual local dashboard port
pub const DEFAULT_PORT: u16 = 8050;

/// Dashboard configuration parsed from environment variables.
///
/// Every variable is optional; the defaults serve on localhost only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Emit Stackdriver-formatted JSON logs instead of plain text
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            json_logs: false,
        }
    }
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup. Unparseable values fall
    /// back to their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = var("HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(defaults.host);

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let json_logs = var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);

        Self {
            host,
            port,
            json_logs,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
