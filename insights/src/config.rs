use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
}

/// JWT signing configuration for access tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub secret_key: String,
    pub token_expire_minutes: i64,
}

/// Per-vendor credential and endpoint configuration.
///
/// A missing API key is not validated at startup; the vendor rejects the
/// first call and that surfaces as a `VendorRequestFailed`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    /// Single fixed outbound request timeout shared by all vendors.
    pub timeout_secs: u64,
    pub openai: VendorConfig,
    pub anthropic: VendorConfig,
    pub cohere: VendorConfig,
    pub gemini: VendorConfig,
    pub deepseek: VendorConfig,
}

fn vendor_config(prefix: &str, default_base_url: &str) -> VendorConfig {
    VendorConfig {
        api_key: env::var(format!("{prefix}_API_KEY")).ok(),
        base_url: env::var(format!("{prefix}_API_BASE_URL"))
            .unwrap_or_else(|_| default_base_url.to_string()),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("INSIGHTS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("INSIGHTS_PORT", 8000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:insights.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
            },
            auth: AuthConfig {
                secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| "change_me".to_string()),
                token_expire_minutes: parse_env_or("ACCESS_TOKEN_EXPIRE_MINUTES", 30),
            },
            providers: ProvidersConfig {
                timeout_secs: parse_env_or("PROVIDER_TIMEOUT_SECS", 30),
                openai: vendor_config("OPENAI", "https://api.openai.com/v1"),
                anthropic: vendor_config("ANTHROPIC", "https://api.anthropic.com"),
                cohere: vendor_config("COHERE", "https://api.cohere.ai"),
                gemini: vendor_config("GEMINI", "https://generativelanguage.googleapis.com/v1beta"),
                deepseek: vendor_config("DEEPSEEK", "https://api.deepseek.com"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_all_vendor_base_urls() {
        let config = Config::default();
        assert!(!config.providers.openai.base_url.is_empty());
        assert!(!config.providers.anthropic.base_url.is_empty());
        assert!(!config.providers.cohere.base_url.is_empty());
        assert!(!config.providers.gemini.base_url.is_empty());
        assert!(!config.providers.deepseek.base_url.is_empty());
    }

    #[test]
    fn missing_api_key_is_not_a_startup_error() {
        // Credentials are lazily validated by the vendor, never at startup.
        let config = Config::default();
        assert!(config.providers.timeout_secs > 0);
    }
}
