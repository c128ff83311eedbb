use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Google Books API key. The volumes endpoint also answers anonymous requests.
    #[serde(default)]
    pub google_books_api_key: Option<String>,

    /// Google Books volumes endpoint
    #[serde(default = "default_google_books_api_url")]
    pub google_books_api_url: String,

    /// Number of candidates requested from the provider
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Number of recommendations returned to the client
    #[serde(default = "default_num_output")]
    pub num_output: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_google_books_api_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

fn default_max_results() -> usize {
    20
}

fn default_num_output() -> usize {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_for_missing_variables() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.google_books_api_key, None);
        assert_eq!(
            config.google_books_api_url,
            "https://www.googleapis.com/books/v1/volumes"
        );
        assert_eq!(config.max_results, 20);
        assert_eq!(config.num_output, 10);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("GOOGLE_BOOKS_API_KEY".to_string(), "secret".to_string()),
            ("NUM_OUTPUT".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.google_books_api_key.as_deref(), Some("secret"));
        assert_eq!(config.num_output, 5);
    }
}
