pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, GenerationApiConfig, LabelConfig, PromptConfig};
pub use loader::{load_config, parse_config_content};
