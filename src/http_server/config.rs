//! Listener and CORS settings for the exercise API.
//!
//! Defaults bind to loopback on 8080 and let the local frontend dev servers
//! call the API from the browser.

use serde::{Deserialize, Serialize};

/// Where the API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to listen on; a hostname such as "localhost" also works
    /// (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by the CORS layer; an empty list allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(), // Vite dev server
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults with a different port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, as handed to `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(9090);
        assert_eq!(config.socket_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 3001}"#).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_empty_cors_list_is_kept() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"host": "localhost", "cors_origins": []}"#).unwrap();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.socket_addr(), "localhost:8080");
    }
}
