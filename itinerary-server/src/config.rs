//! Server configuration.
//!
//! Settings come from the process environment, falling back to an env file
//! (`.env` by default). The env file is read without touching the process
//! environment, so variables already set always win.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use tracing::debug;

use crate::itinerary::{DetectorKind, ItineraryConfig, StartSelection};

/// Default port, used when `SERVER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "itinerary-server")]
#[command(about = "REST API server reconstructing flight itineraries")]
pub struct Cli {
    /// File from which to load environment
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    #[arg(long, short, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The env file exists but could not be read or parsed
    #[error("failed to load environment from {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },

    /// A variable holds a value we cannot use
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`SERVER_HOST`).
    pub host: IpAddr,

    /// Port to bind (`SERVER_PORT`).
    pub port: u16,

    /// Itinerary service settings (`START_SELECTION`, `ENDPOINT_DETECTOR`,
    /// `MAX_FALLBACK_SEGMENTS`).
    pub itinerary: ItineraryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            itinerary: ItineraryConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment, falling back to `env_file`.
    ///
    /// A missing env file is not an error; a malformed one is.
    pub fn load(env_file: &Path) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(env_file)?;
        Self::from_vars(|key| std::env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Build from a variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = parse_var(lookup("SERVER_HOST"), "SERVER_HOST")?.unwrap_or(defaults.host);
        let port = parse_var(lookup("SERVER_PORT"), "SERVER_PORT")?.unwrap_or(defaults.port);
        let start_selection = parse_var::<StartSelection>(lookup("START_SELECTION"), "START_SELECTION")?
            .unwrap_or_default();
        let detector = parse_var::<DetectorKind>(lookup("ENDPOINT_DETECTOR"), "ENDPOINT_DETECTOR")?
            .unwrap_or_default();
        let max_fallback_segments =
            parse_var(lookup("MAX_FALLBACK_SEGMENTS"), "MAX_FALLBACK_SEGMENTS")?
                .unwrap_or(defaults.itinerary.max_fallback_segments);

        Ok(Self {
            host,
            port,
            itinerary: ItineraryConfig::new(start_selection, detector)
                .with_max_fallback_segments(max_fallback_segments),
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(value: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                message: e.to_string(),
            })
        })
        .transpose()
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "env file not found, using process environment only");
        return Ok(HashMap::new());
    }

    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    dotenv::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(to_error)
}
