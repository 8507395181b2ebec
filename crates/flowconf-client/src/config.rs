// Configuration for the console HTTP client

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Server address to connect to, e.g. "http://127.0.0.1:8090"
    pub server_addr: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Context path every request is issued under
    pub context_path: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            server_addr: "http://127.0.0.1:8090".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 10000,
            context_path: "/api/v1".to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config for a single server address
    pub fn new(server_addr: &str) -> Self {
        Self {
            server_addr: server_addr.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set context path
    pub fn with_context_path(mut self, path: &str) -> Self {
        self.context_path = path.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpClientConfig::default();
        assert_eq!(config.context_path, "/api/v1");
        assert_eq!(config.read_timeout_ms, 10000);
        assert_eq!(config.connect_timeout_ms, 5000);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpClientConfig::new("http://localhost:8090")
            .with_timeouts(3000, 15000)
            .with_context_path("/api/v2");

        assert_eq!(config.server_addr, "http://localhost:8090");
        assert_eq!(config.connect_timeout_ms, 3000);
        assert_eq!(config.read_timeout_ms, 15000);
        assert_eq!(config.context_path, "/api/v2");
    }
}
