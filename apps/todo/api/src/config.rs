use core_config::{AppInfo, FromEnv, app_info, env_list, env_parse, server::ServerConfig};
use database::sqlite::SqliteConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    /// Browser origins allowed by CORS (`UI_URL`, comma-separated)
    pub ui_urls: Vec<String>,
    pub swagger_enabled: bool,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?; // Required - will fail if DB_FILENAME is not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let ui_urls = env_list("UI_URL")?;
        let swagger_enabled = env_parse("SWAGGER_ENABLED", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            ui_urls,
            swagger_enabled,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("DB_FILENAME", Some(":memory:")),
                ("UI_URL", Some("http://localhost:3000, https://todo.example.com")),
                ("SWAGGER_ENABLED", None),
                ("APP_ENV", Some("production")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "todo_api");
                assert!(config.database.is_in_memory());
                assert_eq!(
                    config.ui_urls,
                    vec!["http://localhost:3000", "https://todo.example.com"]
                );
                assert!(config.swagger_enabled);
                assert_eq!(config.server.port, 9000);
                assert!(config.environment.is_production());
            },
        );
    }

    #[test]
    fn test_config_requires_ui_url() {
        temp_env::with_vars(
            [("DB_FILENAME", Some("todos.db")), ("UI_URL", None)],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("UI_URL"));
            },
        );
    }

    #[test]
    fn test_config_swagger_toggle() {
        temp_env::with_vars(
            [
                ("DB_FILENAME", Some(":memory:")),
                ("UI_URL", Some("http://localhost:3000")),
                ("SWAGGER_ENABLED", Some("false")),
            ],
            || {
                assert!(!Config::from_env().unwrap().swagger_enabled);
            },
        );
    }
}
