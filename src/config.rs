use std::env;
use std::str::FromStr;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;
const OLLAMA_BASE_URL: &str = "http://localhost:11434";
const OLLAMA_MODEL: &str = "llama3:8b";
const LLM_TEMPERATURE: f32 = 0.7;
const LLM_TIMEOUT_SECS: u64 = 90;
const CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: OLLAMA_BASE_URL.to_string(),
            model: OLLAMA_MODEL.to_string(),
            temperature: LLM_TEMPERATURE,
            timeout: Duration::from_secs(LLM_TIMEOUT_SECS),
        }
    }
}

impl ModelConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: env_or("LLM_ENABLED", defaults.enabled),
            base_url: env::var("OLLAMA_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("OLLAMA_MODEL").unwrap_or(defaults.model),
            temperature: env_or("LLM_TEMPERATURE", defaults.temperature),
            timeout: Duration::from_secs(env_or("LLM_TIMEOUT_SECS", LLM_TIMEOUT_SECS)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub model: ModelConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            cors_origins: split_origins(CORS_ORIGINS),
            model: ModelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the environment, keeping defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or(defaults.cors_origins),
            model: ModelConfig::from_env(),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn split_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "HOST",
        "PORT",
        "CORS_ORIGINS",
        "LLM_ENABLED",
        "OLLAMA_BASE_URL",
        "OLLAMA_MODEL",
        "LLM_TEMPERATURE",
        "LLM_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        clear_env();
        let config = AppConfig::from_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert!(config.model.enabled);
        assert_eq!(config.model.base_url, "http://localhost:11434");
        assert_eq!(config.model.model, "llama3:8b");
        assert_eq!(config.model.timeout, Duration::from_secs(90));
    }

    #[test]
    #[serial]
    fn test_reads_overrides_from_env() {
        clear_env();
        env::set_var("PORT", "8081");
        env::set_var("CORS_ORIGINS", "http://a.test, http://b.test,");
        env::set_var("LLM_ENABLED", "false");
        env::set_var("OLLAMA_MODEL", "mistral");
        env::set_var("LLM_TIMEOUT_SECS", "15");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8081);
        assert_eq!(
            config.cors_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(!config.model.enabled);
        assert_eq!(config.model.model, "mistral");
        assert_eq!(config.model.timeout, Duration::from_secs(15));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_values_fall_back_to_defaults() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("LLM_TEMPERATURE", "warm");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 5000);
        assert_eq!(config.model.temperature, 0.7);

        clear_env();
    }

    #[test]
    fn test_wildcard_origin() {
        let mut config = AppConfig::default();
        assert!(!config.allows_any_origin());
        config.cors_origins = vec!["*".to_string()];
        assert!(config.allows_any_origin());
    }
}
