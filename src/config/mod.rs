use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://127.0.0.1:5500", "http://localhost:5500"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid CATALOG_API_URL: {0}")]
    InvalidCatalogUrl(#[from] url::ParseError),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Forwarded to the catalog as `key` when present.
    pub api_key: Option<String>,
    /// Reported by `/whoami`.
    pub hostname: Option<String>,
    pub static_dir: PathBuf,
    pub catalog_url: Url,
    /// Browser origins allowed cross-origin access. Exact string match only.
    pub allowed_origins: Vec<String>,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let catalog_url = Url::parse(
            var("CATALOG_API_URL")
                .as_deref()
                .unwrap_or(DEFAULT_CATALOG_URL),
        )?;

        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        };

        Ok(Config {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            api_key: var("API_KEY"),
            hostname: var("HOSTNAME"),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            catalog_url,
            allowed_origins,
            is_production: var("APP_ENV").as_deref() == Some("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert!(config.api_key.is_none());
        assert!(config.hostname.is_none());
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(
            config.allowed_origins,
            vec!["http://127.0.0.1:5500", "http://localhost:5500"]
        );
        assert!(!config.is_production);
    }

    #[test]
    fn reads_port_and_api_key() {
        let config = load(&[("PORT", "9090"), ("API_KEY", "secret")]).unwrap();
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn empty_api_key_counts_as_unset() {
        let config = load(&[("API_KEY", "")]).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
    }

    #[test]
    fn rejects_invalid_catalog_url() {
        let err = load(&[("CATALOG_API_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCatalogUrl(_)));
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = load(&[(
            "ALLOWED_ORIGINS",
            "http://a.test , http://b.test,,",
        )])
        .unwrap();
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn production_flag_follows_app_env() {
        assert!(load(&[("APP_ENV", "production")]).unwrap().is_production);
        assert!(!load(&[("APP_ENV", "staging")]).unwrap().is_production);
    }
}
