pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{SearchConfig, SuperJobKey};
pub use core::{aggregator::Aggregator, report::render_table, survey::SurveyEngine};
pub use utils::error::{Result, SurveyError};
