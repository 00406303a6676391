use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub detection: DetectionSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.{environment}` (optional) under `APP__SECTION__KEY`
    /// environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_mb: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    /// Kept as free text so an unknown value degrades to "not configured"
    /// instead of failing startup.
    pub provider: String,
    pub model: String,
    pub ollama_binary: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            provider: "ollama_cli".to_string(),
            model: "llava".to_string(),
            ollama_binary: "ollama".to_string(),
            base_url: None,
            api_key: None,
            timeout_seconds: 120,
            max_tokens: 1024,
            temperature: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionProviderSetting {
    Roboflow,
    Mock,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    pub provider: DetectionProviderSetting,
    pub base_url: String,
    pub model_id: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            provider: DetectionProviderSetting::Disabled,
            base_url: "https://detect.roboflow.com".to_string(),
            model_id: "brain-tumor-noh6o/2".to_string(),
            api_key: None,
            timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub strict_conversation_lookup: bool,
    pub default_findings: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            strict_conversation_lookup: true,
            default_findings: "brain tumor".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,radialog=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}
