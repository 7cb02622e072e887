//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `ASKME_*` environment variables; the port also
//! honours the conventional `PORT` when `ASKME_PORT` is unset.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `ASKME_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `0.0.0.0`.
    pub bind_addr: IpAddr,

    /// FAQ JSON document loaded at startup. Default: `./faq.json`.
    pub faq_path: PathBuf,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,

    /// Corpus size at which scoring fans out across threads. Default: `512`.
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            faq_path: PathBuf::from("./faq.json"),
            cors_origins: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "ASKME_PORT";
    const ENV_PORT_FALLBACK: &'static str = "PORT";
    const ENV_BIND_ADDR: &'static str = "ASKME_BIND_ADDR";
    const ENV_FAQ_PATH: &'static str = "ASKME_FAQ_PATH";
    const ENV_CORS_ORIGINS: &'static str = "ASKME_CORS_ORIGINS";
    const ENV_PARALLEL_THRESHOLD: &'static str = "ASKME_PARALLEL_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let faq_path = Self::parse_path_from_env(Self::ENV_FAQ_PATH, defaults.faq_path);
        let cors_origins = Self::parse_list_from_env(Self::ENV_CORS_ORIGINS);
        let parallel_threshold =
            Self::parse_usize_from_env(Self::ENV_PARALLEL_THRESHOLD, defaults.parallel_threshold);

        Ok(Self {
            port,
            bind_addr,
            faq_path,
            cors_origins,
            parallel_threshold,
        })
    }

    /// Checks that the FAQ file exists and every CORS origin is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.faq_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.faq_path.clone(),
            });
        }
        if !self.faq_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.faq_path.clone(),
            });
        }

        for origin in &self.cors_origins {
            if !is_http_origin(origin) {
                return Err(ConfigError::InvalidCorsOrigin {
                    value: origin.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        let raw = env::var(Self::ENV_PORT).or_else(|_| env::var(Self::ENV_PORT_FALLBACK));
        match raw {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_list_from_env(var_name: &str) -> Vec<String> {
        env::var(var_name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

fn is_http_origin(origin: &str) -> bool {
    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));
    match rest {
        Some(host) => !host.is_empty() && !host.contains('/'),
        None => false,
    }
}
