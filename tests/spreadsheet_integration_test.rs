use anyhow::Result;
use calgary_dogs::core::DatasetSource;
use calgary_dogs::{AnalysisEngine, AnalyzerError, FileSource};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn write_sheet(sheet: &mut Worksheet, rows: &[(&str, f64, &str, f64)]) -> Result<()> {
    for (col, name) in ["Breed", "Year", "Month", "Total"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, (breed, year, month, total)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        // 數字以浮點數寫入，和 Excel 實際存檔方式相同
        sheet.write_string(row, 0, *breed)?;
        sheet.write_number(row, 1, *year)?;
        sheet.write_string(row, 2, *month)?;
        sheet.write_number(row, 3, *total)?;
    }
    Ok(())
}

/// 第一個工作表是 BOXER/POODLE，第二個名為 "2016" 只有 PUG
fn write_workbook(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Registrations")?;
        write_sheet(
            sheet,
            &[
                ("BOXER", 2015.0, "Jan", 10.0),
                ("BOXER", 2015.0, "Feb", 5.0),
                ("POODLE", 2015.0, "Jan", 5.0),
            ],
        )?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("2016")?;
        write_sheet(sheet, &[("PUG", 2016.0, "Mar", 7.0)])?;
    }
    workbook.save(path)?;
    Ok(())
}

#[test]
fn test_default_load_reads_first_worksheet() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("CalgaryDogBreeds.xlsx");
    write_workbook(&path)?;

    let dataset = FileSource::new(&path, None).load()?;

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.grand_total(), 20);
    assert_eq!(dataset.records()[0].year, 2015);
    assert_eq!(dataset.records()[0].total, 10);
    assert!(dataset.breed_names().contains("POODLE"));
    assert!(!dataset.breed_names().contains("PUG"));
    Ok(())
}

#[test]
fn test_named_sheet_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("CalgaryDogBreeds.xlsx");
    write_workbook(&path)?;

    let dataset = FileSource::new(&path, Some("2016".to_string())).load()?;

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].breed, "PUG");
    assert_eq!(dataset.records()[0].year, 2016);
    assert_eq!(dataset.records()[0].month, "Mar");
    assert_eq!(dataset.grand_total(), 7);
    Ok(())
}

#[test]
fn test_unknown_sheet_is_spreadsheet_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("CalgaryDogBreeds.xlsx");
    write_workbook(&path)?;

    let err = FileSource::new(&path, Some("2099".to_string()))
        .load()
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::SpreadsheetError(_)));
    Ok(())
}

#[test]
fn test_report_from_workbook() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("CalgaryDogBreeds.xlsx");
    write_workbook(&path)?;

    let engine = AnalysisEngine::new(FileSource::new(&path, None));
    let mut output: Vec<u8> = Vec::new();
    engine.run(&mut Cursor::new("boxer\n"), &mut output)?;

    let text = String::from_utf8(output)?;
    assert!(text.contains("The BOXER was found in the top breeds for years: 2015\n"));
    assert!(text.contains("There have been 15 BOXER dogs registered total.\n"));
    assert!(text.contains("The BOXER was 75.000000% of top breeds across all years.\n"));
    Ok(())
}
