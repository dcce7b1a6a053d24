//! Server settings loaded via OrthoConfig.
//!
//! Values merge CLI flags, `TRACKER_*` environment variables and an optional
//! configuration file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Process-level configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKER")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port; defaults to 3000.
    pub port: Option<u16>,
    /// PostgreSQL URL. When unset the volatile in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw.parse().map_err(|source| SettingsError::InvalidHost {
                host: raw.to_owned(),
                source,
            })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Pool size for the database connection pool.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "TRACKER_HOST",
        "TRACKER_PORT",
        "TRACKER_DATABASE_URL",
        "TRACKER_DB_MAX_CONNECTIONS",
        "TRACKER_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_3000_without_a_database() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("TRACKER_PORT", Some("8081".to_owned())),
            (
                "TRACKER_DATABASE_URL",
                Some("postgres://tracker@localhost/tracker".to_owned()),
            ),
            ("TRACKER_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("TRACKER_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid address"),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://tracker@localhost/tracker")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let _guard = lock_env([
            ("TRACKER_HOST", Some("localhost".to_owned())),
            ("TRACKER_PORT", None),
        ]);

        let settings = load_from_empty_args();
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost { .. })
        ));
    }

    #[rstest]
    fn blank_database_urls_mean_in_memory() {
        let _guard = lock_env([("TRACKER_DATABASE_URL", Some("  ".to_owned()))]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }
}
