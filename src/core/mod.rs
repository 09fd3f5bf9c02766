pub mod aggregator;
pub mod report;
pub mod salary;
pub mod survey;

pub use crate::domain::model::{FetchOutcome, LanguageSummary, SearchQuery};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
