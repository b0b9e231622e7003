pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, Settings};

pub use adapters::FileSource;
pub use core::{engine::AnalysisEngine, report::BreedReport};
pub use domain::model::{BreedSelection, Dataset, RegistrationRecord};
pub use utils::error::{AnalyzerError, Result};
