pub mod analyzer;
pub mod engine;
pub mod prompt;
pub mod report;

pub use crate::domain::model::{BreedSelection, Dataset, RegistrationRecord};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, OutputFormat};
pub use crate::utils::error::Result;
