use idea_checker::config::{Config, LlmConfig, LogsConfig, ServerConfig};

/// Config with a usable (non-placeholder) credential.
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            base_url: String::new(),
            api_key: "sk-test-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1500,
            temperature: 0.7,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            public_url: "https://ideachecker.test".to_string(),
            logs: LogsConfig::default(),
        },
    }
}

/// Config whose credential must short-circuit the handler.
pub fn create_config_with_api_key(api_key: &str) -> Config {
    let mut config = create_test_config();
    config.llm.api_key = api_key.to_string();
    config
}
