use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "surreal-signup".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            surrealdb: SurrealDbConfig {
                host: "localhost".to_string(),
                port: 8000,
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "signup".to_string(),
                database: "signup".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_overrides() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load()?;

            assert_eq!(config.service.name, "surreal-signup");
            assert_eq!(config.logging.level, "info");
            assert_eq!(config.surrealdb.port, 8000);

            Ok(())
        });
    }

    #[test]
    fn test_toml_then_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [logging]
                level = "debug"

                [surrealdb]
                host = "db.internal"
                "#,
            )?;
            jail.set_env("APP_SURREALDB__HOST", "override.internal");

            let config = AppConfig::load()?;

            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.surrealdb.host, "override.internal");
            assert_eq!(config.surrealdb.username, "root");

            Ok(())
        });
    }
}
