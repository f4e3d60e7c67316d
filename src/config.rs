use std::env;
use secrecy::SecretString;

pub const DEFAULT_ENV_FILE: &str = "api.env";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: SecretString::from(env::var("GEMINI_API_KEY").unwrap_or_default()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Loads the env file named by `ENV_FILE` (default `api.env`) into the process
    /// environment. A missing file is not an error.
    pub fn load_env_file() -> Option<String> {
        let path = env::var("ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        match dotenvy::from_filename(&path) {
            Ok(_) => Some(path),
            Err(err) => {
                log::debug!("No env file loaded from {}: {}", path, err);
                None
            }
        }
    }

    pub fn has_api_key(&self) -> bool {
        use secrecy::ExposeSecret;

        !self.gemini_api_key.expose_secret().trim().is_empty()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
