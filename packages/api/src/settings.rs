use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

impl Server {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Database {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Upper bound on pooled connections.
    pub connections: u32,
}

impl Database {
    /// Connection options for the pool. Built field by field so passwords
    /// never need URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    /// Connection string with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.name
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Settings {
    pub server: Server,
    pub db: Database,
}

impl Settings {
    /// Load settings from `config.toml` (optional) and the process environment.
    ///
    /// `DB_HOST` maps to `db.host`, `SERVER_PORT` to `server.port`, and so on.
    /// A bare `PORT` variable takes precedence over everything else for the
    /// listen port.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(
            Environment::default().separator("_"),
            std::env::var("PORT").ok(),
        )
    }

    fn load(environment: Environment, port: Option<String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("db.user", "postgres")?
            .set_default("db.password", "postgres")?
            .set_default("db.host", "localhost")?
            .set_default("db.port", 5432)?
            .set_default("db.name", "notes")?
            .set_default("db.connections", 5)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .set_override_option("server.port", port)?
            .build()?;

        config.try_deserialize()
    }
}
