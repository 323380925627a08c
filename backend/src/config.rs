use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DIST_DIR: &str = "frontend/dist";
const REDIRECTS_FILE_NAME: &str = "_redirects";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR `{value}` is not a socket address")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root of the built page bundle.
    pub dist_dir: PathBuf,
    /// Redirect manifest; defaults to the copy at the bundle root.
    pub redirects_file: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind_value.clone(), source })?;

        let dist_dir = match lookup("DIST_DIR") {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::Empty { name: "DIST_DIR" }),
            Some(dir) => PathBuf::from(dir.trim()),
            None => PathBuf::from(DEFAULT_DIST_DIR),
        };

        let redirects_file = match lookup("REDIRECTS_FILE") {
            Some(file) if file.trim().is_empty() => return Err(ConfigError::Empty { name: "REDIRECTS_FILE" }),
            Some(file) => PathBuf::from(file.trim()),
            None => dist_dir.join(REDIRECTS_FILE_NAME),
        };

        Ok(ServerConfig { bind_addr, dist_dir, redirects_file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_frontend_bundle() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.redirects_file, PathBuf::from("frontend/dist/_redirects"));
    }

    #[test]
    fn redirects_default_follows_dist_dir() {
        let config = config_from(&[("DIST_DIR", "/srv/welcome"), ("BIND_ADDR", "0.0.0.0:8080")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.redirects_file, PathBuf::from("/srv/welcome/_redirects"));

        let config = config_from(&[("DIST_DIR", "/srv/welcome"), ("REDIRECTS_FILE", "/etc/welcome/_redirects")]).unwrap();
        assert_eq!(config.redirects_file, PathBuf::from("/etc/welcome/_redirects"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            config_from(&[("DIST_DIR", "  ")]),
            Err(ConfigError::Empty { name: "DIST_DIR" })
        ));
    }
}
