use crate::error::WanderWiseError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// WanderWise application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key; without it neither embeddings nor generation are available
    #[serde(skip_serializing)]
    pub gemini_api_key: Option<String>,

    /// Generative language API base URL
    pub gemini_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Text generation model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Allowed CORS origin
    pub cors_origin: String,

    /// Log directory (console only when unset)
    pub log_dir: Option<PathBuf>,

    /// Log level
    pub log_level: String,

    /// Seed the vector store with demo documents on startup
    pub seed_demo_data: bool,

    /// Timeout for outbound API calls, in seconds
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            embedding_model: "embedding-001".to_string(),
            llm_model: "gemini-pro".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            cors_origin: "http://localhost:3000".to_string(),
            log_dir: None,
            log_level: "info".to_string(),
            seed_demo_data: true,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, WanderWiseError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let production = lookup("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            gemini_api_key: lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()),
            gemini_base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            embedding_model: lookup("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            llm_model: lookup("LLM_MODEL").unwrap_or(defaults.llm_model),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("PORT")
                .or_else(|| lookup("SERVER_PORT"))
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            cors_origin: lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            log_dir: lookup("LOG_DIR").map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            seed_demo_data: lookup("SEED_DEMO_DATA")
                .map(|s| parse_bool(&s))
                .unwrap_or(!production),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Whether a generative language API key is configured
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), WanderWiseError> {
        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://") {
            return Err(WanderWiseError::config(
                "Gemini base URL must start with http:// or https://"
            ));
        }

        if self.embedding_model.is_empty() || self.llm_model.is_empty() {
            return Err(WanderWiseError::config("Model names cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(WanderWiseError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
