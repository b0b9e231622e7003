use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Dog breed not found in data: {input}")]
    InvalidBreedInput { input: String },

    #[error("Failed to load data from '{path}': {message}")]
    DataLoadError { path: String, message: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Malformed value '{value}' in column {column} at row {row}")]
    MalformedCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input stream closed before a valid breed was entered")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    DataLoad,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::InvalidBreedInput { .. } | AnalyzerError::InputClosed => {
                ErrorCategory::Input
            }
            AnalyzerError::DataLoadError { .. }
            | AnalyzerError::MissingColumn { .. }
            | AnalyzerError::MalformedCell { .. }
            | AnalyzerError::SpreadsheetError(_)
            | AnalyzerError::CsvError(_) => ErrorCategory::DataLoad,
            AnalyzerError::ConfigValidationError { .. }
            | AnalyzerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AnalyzerError::IoError(_) | AnalyzerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 只有輸入錯誤可以在提示迴圈中恢復
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::DataLoad | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether the prompt loop may swallow this error and ask again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalyzerError::InvalidBreedInput { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyzerError::InvalidBreedInput { .. } => {
                "Dog breed not found in data. Please try again.".to_string()
            }
            AnalyzerError::DataLoadError { path, .. } => {
                format!("Could not load the registration data from {}", path)
            }
            AnalyzerError::MissingColumn { column } => {
                format!("The data file has no '{}' column", column)
            }
            AnalyzerError::MalformedCell { row, column, .. } => {
                format!("The data file has an unreadable {} value on row {}", column, row)
            }
            AnalyzerError::SpreadsheetError(_) => "The spreadsheet could not be read".to_string(),
            AnalyzerError::CsvError(_) => "The CSV file could not be read".to_string(),
            AnalyzerError::IoError(_) => "A file system or terminal error occurred".to_string(),
            AnalyzerError::SerializationError(_) => "The report could not be serialized".to_string(),
            AnalyzerError::ConfigValidationError { field, .. }
            | AnalyzerError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value for {} is invalid", field)
            }
            AnalyzerError::InputClosed => "No breed was entered before input ended".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Run again and enter a breed name that appears in the data file".to_string()
            }
            ErrorCategory::DataLoad => {
                "Check that the data file exists and has Breed, Year, Month and Total columns"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML configuration file".to_string()
            }
            ErrorCategory::System => "Check file permissions and try again".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_breed_is_recoverable() {
        let invalid = AnalyzerError::InvalidBreedInput {
            input: "CHIHUAHUA".to_string(),
        };
        assert!(invalid.is_recoverable());
        assert_eq!(invalid.category(), ErrorCategory::Input);

        let missing = AnalyzerError::MissingColumn {
            column: "Total".to_string(),
        };
        assert!(!missing.is_recoverable());
        assert!(!AnalyzerError::InputClosed.is_recoverable());
    }

    #[test]
    fn test_load_errors_are_high_severity() {
        let err = AnalyzerError::DataLoadError {
            path: "CalgaryDogBreeds.xlsx".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::DataLoad);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("CalgaryDogBreeds.xlsx"));
    }

    #[test]
    fn test_invalid_breed_message() {
        let err = AnalyzerError::InvalidBreedInput {
            input: "X".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Dog breed not found in data. Please try again."
        );
    }
}
