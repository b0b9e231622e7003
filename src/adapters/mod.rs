// Adapters layer: concrete dataset sources (spreadsheet workbooks and CSV files).

pub mod csv_file;
pub mod spreadsheet;

use crate::domain::model::Dataset;
use crate::domain::ports::DatasetSource;
use crate::utils::error::{AnalyzerError, Result};
use std::path::PathBuf;

pub const BREED_COLUMN: &str = "Breed";
pub const YEAR_COLUMN: &str = "Year";
pub const MONTH_COLUMN: &str = "Month";
pub const TOTAL_COLUMN: &str = "Total";

pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods", "csv"];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub breed: usize,
    pub year: usize,
    pub month: usize,
    pub total: usize,
}

impl ColumnIndex {
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == name)
                .ok_or_else(|| AnalyzerError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(Self {
            breed: find(BREED_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            month: find(MONTH_COLUMN)?,
            total: find(TOTAL_COLUMN)?,
        })
    }
}

/// A data file on disk; the extension picks the reader.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, sheet: Option<String>) -> Self {
        Self {
            path: path.into(),
            sheet,
        }
    }
}

impl DatasetSource for FileSource {
    fn load(&self) -> Result<Dataset> {
        if !self.path.is_file() {
            return Err(AnalyzerError::DataLoadError {
                path: self.path.display().to_string(),
                message: "file not found".to_string(),
            });
        }

        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        tracing::debug!("Loading {} as .{}", self.path.display(), ext);

        let dataset = match ext.as_str() {
            "csv" => csv_file::load_csv(&self.path)?,
            e if SPREADSHEET_EXTENSIONS.contains(&e) => {
                spreadsheet::load_workbook(&self.path, self.sheet.as_deref())?
            }
            other => {
                return Err(AnalyzerError::DataLoadError {
                    path: self.path.display().to_string(),
                    message: format!("unsupported file extension: .{}", other),
                })
            }
        };

        tracing::info!("Loaded {} records from {}", dataset.len(), self.describe());
        Ok(dataset)
    }

    fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("{} [{}]", self.path.display(), sheet),
            None => self.path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_resolve_columns_in_any_order() {
        let headers = ["Total", " Month ", "Breed", "Extra", "Year"];
        let index = ColumnIndex::resolve(&headers).unwrap();
        assert_eq!(
            index,
            ColumnIndex {
                breed: 2,
                year: 4,
                month: 1,
                total: 0
            }
        );
    }

    #[test]
    fn test_resolve_reports_missing_column() {
        let headers = ["Breed", "Year", "Month"];
        let err = ColumnIndex::resolve(&headers).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingColumn { ref column } if column == "Total"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let source = FileSource::new("does-not-exist.xlsx", None);
        let err = source.load().unwrap_err();
        assert!(matches!(err, AnalyzerError::DataLoadError { .. }));
    }

    #[test]
    fn test_unsupported_extension_is_load_error() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Breed,Year,Month,Total\n").unwrap();

        let err = FileSource::new(file.path(), None).load().unwrap_err();
        assert!(matches!(err, AnalyzerError::DataLoadError { ref message, .. } if message.contains(".txt")));
    }

    #[test]
    fn test_dispatches_csv_by_extension() {
        let mut file = Builder::new().suffix(".CSV").tempfile().unwrap();
        file.write_all(b"Breed,Year,Month,Total\nBOXER,2015,Jan,10\n")
            .unwrap();

        let dataset = FileSource::new(file.path(), None).load().unwrap();
        assert_eq!(dataset.len(), 1);
    }
}
