pub mod credentials;
pub mod search_config;

#[cfg(feature = "cli")]
pub mod cli;

pub use credentials::{SuperJobKey, SJ_SECRET_KEY_VAR};
pub use search_config::{HeadHunterConfig, SearchConfig, SuperJobConfig};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
