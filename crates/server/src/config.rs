//! Server configuration, from flags or the environment.

use std::fmt;

use clap::Args;

/// Bind address, port and the token handed to the front-end.
#[derive(Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ISOMAP_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "ISOMAP_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Mapbox access token served at /api/mapbox-token
    #[arg(long, env = "MAPBOX_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl ServerConfig {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// The configured token; an empty value counts as unset.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn address(&self) -> (&str, u16) {
        (self.bind.as_str(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
            token: None,
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("token", &self.token().map(|_| "<set>"))
            .finish()
    }
}
