mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DetectionProviderSetting, DetectionSettings, ENV_PREFIX, ENV_SEPARATOR, InferenceSettings,
    LoggingSettings, ServerSettings, SessionSettings, Settings,
};
