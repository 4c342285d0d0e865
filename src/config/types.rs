// Configuration type definitions

use serde::Deserialize;

/// Suggest server connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    // Flask development default, where the marketplace runs out of the box
    "http://127.0.0.1:5000".to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_server_section_parsed() {
        let config: Config = toml::from_str(
            r#"
[server]
base_url = "https://market.example.org"
"#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "https://market.example.org");
    }

    #[test]
    fn test_empty_server_section_uses_default() {
        let config: Config = toml::from_str("[server]\n").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: Config = toml::from_str(
            r#"
[server]
base_url = "http://localhost:8000"
timeout = 30
"#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://localhost:8000");
    }
}
