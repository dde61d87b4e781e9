use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub webhook: WebhookSettings,
    #[serde(default)]
    pub completion: CompletionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    /// Inbound payload ceiling in bytes; larger bodies are rejected by the
    /// framework before they reach any handler.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookSettings {
    /// Shared secret expected in the `desk-shared-secret` header. An empty
    /// value means every request is rejected, never that auth is disabled.
    #[serde(default)]
    pub shared_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_completion_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            endpoint: default_completion_endpoint(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_max_body_bytes() -> usize { 5 * 1024 * 1024 }
fn default_completion_endpoint() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-4o-mini".to_string() }
fn default_temperature() -> f64 { 0.2 }
fn default_timeout_secs() -> u64 { 30 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with DESK_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with DESK_)
            // e.g., DESK_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the flat environment variables the deployment platform supplies
/// (secrets and the listening port) on top of the layered sources.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    // Shared secret: DESK_SHARED_SECRET first, then the prefixed form
    let shared_secret = env::var("DESK_SHARED_SECRET")
        .or_else(|_| env::var("DESK_WEBHOOK__SHARED_SECRET"))
        .ok();

    // Completion API credential: OPENAI_API_KEY first, then the prefixed form
    let api_key = env::var("OPENAI_API_KEY")
        .or_else(|_| env::var("DESK_COMPLETION__API_KEY"))
        .ok();

    // Listening port: bare PORT wins, as set by most hosting platforms
    let port = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok());

    let mut builder = Config::builder().add_source(settings);

    if let Some(secret) = shared_secret {
        builder = builder.set_override("webhook.shared_secret", secret)?;
    }
    if let Some(key) = api_key {
        builder = builder.set_override("completion.api_key", key)?;
    }
    if let Some(port) = port {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
