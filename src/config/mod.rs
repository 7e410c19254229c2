mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

/// Loads configuration from the YAML file at `CONFIG_PATH` (default
/// `config.yaml`). A missing file is not an error: defaults apply, so the
/// server runs with nothing but `OPENAI_API_KEY` in the environment. The
/// environment variable always wins over the file's `api_key`.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Ok(key) = env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            config.llm.api_key = key;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_config() {
        let yaml = r#"
llm:
  api_key: sk-real-key
  model: gpt-4o
  max_tokens: 800
  temperature: 0.3
server:
  host: 127.0.0.1
  port: 3000
  public_url: https://ideachecker.example.com
  logs:
    level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.api_key, "sk-real-key");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 800);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.logs.level, "debug");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let yaml = "llm:\n  api_key: sk-something\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 1500);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
    }

    #[test]
    fn placeholder_keys_are_not_configured() {
        let mut llm = LlmConfig::default();
        assert!(!llm.credential_configured());

        llm.api_key = "dummy-key-for-build".to_string();
        assert!(!llm.credential_configured());

        llm.api_key = "your_openai_api_key_here".to_string();
        assert!(!llm.credential_configured());

        llm.api_key = "   ".to_string();
        assert!(!llm.credential_configured());

        llm.api_key = "sk-live-key".to_string();
        assert!(llm.credential_configured());
    }
}
