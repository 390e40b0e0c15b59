//! Server configuration parsed from environment variables.

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The `[package.metadata.leptos]` section could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos site root (where `/pkg` assets live).
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: Leptos `site-root` from `Cargo.toml` when absent
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::ConfigParse`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = std::env::var("SITE_ROOT").ok().filter(|s| !s.trim().is_empty());
        Ok(Self { port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Load Leptos options from the manifest and apply overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Leptos`] when the manifest section is missing
    /// or malformed.
    pub fn leptos_options(&self) -> Result<LeptosOptions, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
        let mut options = conf.leptos_options;
        if let Some(root) = &self.site_root {
            options.site_root = root.clone().into();
        }
        Ok(options)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerError::ConfigParse(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
