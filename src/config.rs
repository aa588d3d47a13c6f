use serde::Deserialize;

fn default_port() -> u16 { 8080 }
fn default_static_dir() -> String { "static".to_string() }
fn default_webhook_timeout_ms() -> u64 { 8_000 }

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Allowed browser origins for the API; empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port(), static_dir: default_static_dir() }
    }
}

/// Marketing-automation endpoint that receives captured leads.
#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: Option<String>,
    #[serde(default = "default_webhook_timeout_ms")]
    pub timeout_ms: u64,
}

impl WebhookConfig {
    /// Configured URL, ignoring blank entries left in config files.
    pub fn endpoint(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self { url: None, timeout_ms: default_webhook_timeout_ms() }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
