use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration.
///
/// Resolution order (later wins):
/// - built-in defaults
/// - `config.toml` in the working directory, if present
/// - environment variables (`DATABASE_URL`, `LISTEN_ADDR`, `PORT`, `LOGLEVEL`,
///   `ENVIRONMENT`, `INIT_SCHEMA`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub port: u16,
    pub loglevel: String,
    pub environment: String,
    /// Run the bundled DDL on startup. Disable when the schema is managed elsewhere.
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:bucketlist.sqlite".to_string(),
            listen_addr: "0.0.0.0".to_string(),
            port: 8000,
            loglevel: "info".to_string(),
            environment: "development".to_string(),
            init_schema: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::raw().only(&[
                "database_url",
                "listen_addr",
                "port",
                "loglevel",
                "environment",
                "init_schema",
            ]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.listen_addr, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Make `cfg` the process-wide configuration. The first call wins.
pub fn install(cfg: Config) -> &'static Config {
    CONFIG.get_or_init(|| cfg)
}

/// The installed configuration, or the defaults when nothing was installed
/// (library use and tests).
pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
