use crate::adapters::ColumnIndex;
use crate::domain::model::{Dataset, RegistrationRecord};
use crate::utils::error::Result;
use std::io::Read;
use std::path::Path;

pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Reads `Breed,Year,Month,Total` rows. Extra columns are ignored.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let header_names: Vec<&str> = headers.iter().collect();
    ColumnIndex::resolve(&header_names)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let record: RegistrationRecord = row.deserialize(Some(&headers))?;
        records.push(record);
    }

    tracing::debug!("Parsed {} CSV rows", records.len());
    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AnalyzerError;

    #[test]
    fn test_read_csv_with_extra_columns() {
        let data = "\
Month,Breed,Total,Year,Notes
Jan,BOXER,10,2015,x
Feb, BOXER ,5,2015,
Jan,POODLE,5,2015,y
";
        let dataset = read_csv(data.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.records()[1],
            RegistrationRecord::new("BOXER", 2015, "Feb", 5)
        );
    }

    #[test]
    fn test_read_csv_missing_column() {
        let data = "Breed,Year,Total\nBOXER,2015,10\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingColumn { ref column } if column == "Month"));
    }

    #[test]
    fn test_read_csv_malformed_total() {
        let data = "Breed,Year,Month,Total\nBOXER,2015,Jan,ten\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyzerError::CsvError(_)));
    }
}
