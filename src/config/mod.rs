#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::SUPPORTED_EXTENSIONS;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "CalgaryDogBreeds.xlsx";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calgary-dogs")]
#[command(about = "Registration statistics for a dog breed in the Calgary data set")]
pub struct CliConfig {
    /// Data file (.xlsx, .xls, .ods or .csv) [default: CalgaryDogBreeds.xlsx]
    #[arg(long)]
    pub data: Option<String>,

    /// Worksheet to read instead of the first one
    #[arg(long)]
    pub sheet: Option<String>,

    /// Breed to report on; skips the interactive prompt
    #[arg(long)]
    pub breed: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

/// Effective settings after the CLI has been layered over the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_path: String,
    pub sheet: Option<String>,
    pub breed: Option<String>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_FILE.to_string(),
            sheet: None,
            breed: None,
            format: OutputFormat::Text,
            verbose: false,
            log_level: None,
            json_logs: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn sheet_name(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn preselected_breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data", &self.data_path)?;
        validation::validate_file_extension("data", &self.data_path, SUPPORTED_EXTENSIONS)?;
        if let Some(sheet) = &self.sheet {
            validation::validate_non_empty_string("sheet", sheet)?;
        }
        if let Some(breed) = &self.breed {
            validation::validate_non_empty_string("breed", breed)?;
        }
        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, toml_config::LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_read_calgary_workbook() {
        let settings = Settings::default();
        assert_eq!(settings.data_path(), "CalgaryDogBreeds.xlsx");
        assert_eq!(settings.output_format(), OutputFormat::Text);
        assert!(settings.preselected_breed().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let settings = Settings {
            data_path: "dogs.parquet".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            breed: Some("   ".to_string()),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
