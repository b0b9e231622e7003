use crate::adapters::{ColumnIndex, BREED_COLUMN, MONTH_COLUMN, TOTAL_COLUMN, YEAR_COLUMN};
use crate::domain::model::{Dataset, RegistrationRecord};
use crate::utils::error::{AnalyzerError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Reads the named worksheet, or the first one when no name is given.
pub fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AnalyzerError::DataLoadError {
                path: path.display().to_string(),
                message: "workbook has no worksheets".to_string(),
            })??,
    };

    records_from_range(&range)
}

/// The first row is the header; rows with every cell empty are skipped.
pub fn records_from_range(range: &Range<Data>) -> Result<Dataset> {
    let mut rows = range.rows();

    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|c| c.to_string()).collect(),
        None => {
            return Err(AnalyzerError::MissingColumn {
                column: BREED_COLUMN.to_string(),
            })
        }
    };
    let columns = ColumnIndex::resolve(&header)?;

    let mut records = Vec::new();
    for (i, cells) in rows.enumerate() {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        // 試算表列號從 1 開始，且第 1 列是標題
        let row = i + 2;

        let year = integer_cell(cells, columns.year, row, YEAR_COLUMN)?;
        let record = RegistrationRecord {
            breed: text_cell(cells, columns.breed, row, BREED_COLUMN)?,
            year: i32::try_from(year)
                .map_err(|_| malformed(row, YEAR_COLUMN, cells.get(columns.year)))?,
            month: text_cell(cells, columns.month, row, MONTH_COLUMN)?,
            total: integer_cell(cells, columns.total, row, TOTAL_COLUMN)?,
        };
        records.push(record);
    }

    tracing::debug!("Parsed {} worksheet rows", records.len());
    Ok(Dataset::new(records))
}

fn malformed(row: usize, column: &str, cell: Option<&Data>) -> AnalyzerError {
    AnalyzerError::MalformedCell {
        row,
        column: column.to_string(),
        value: cell.map(|c| c.to_string()).unwrap_or_default(),
    }
}

fn text_cell(cells: &[Data], idx: usize, row: usize, column: &str) -> Result<String> {
    match cells.get(idx) {
        Some(Data::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Data::Int(i)) => Ok(i.to_string()),
        Some(Data::Float(f)) if f.fract() == 0.0 => Ok(format!("{}", *f as i64)),
        other => Err(malformed(row, column, other)),
    }
}

fn integer_cell(cells: &[Data], idx: usize, row: usize, column: &str) -> Result<i64> {
    match cells.get(idx) {
        Some(Data::Int(i)) => Ok(*i),
        Some(Data::Float(f)) if f.is_finite() && f.fract() == 0.0 => Ok(*f as i64),
        Some(Data::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(row, column, cells.get(idx))),
        other => Err(malformed(row, column, other)),
    }
}
