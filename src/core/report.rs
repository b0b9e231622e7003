use crate::core::analyzer;
use crate::domain::model::{BreedSelection, Dataset};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub const BANNER: &str = "ENSF 692 Dogs of Calgary";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyShare {
    pub year: i32,
    pub percentage: f64,
}

/// Every statistic printed for one breed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedReport {
    pub breed: BreedSelection,
    pub years: Vec<i32>,
    pub total_registrations: i64,
    pub yearly_percentages: Vec<YearlyShare>,
    pub overall_percentage: f64,
    pub popular_months: Vec<String>,
}

impl BreedReport {
    pub fn build(dataset: &Dataset, breed: &BreedSelection) -> Self {
        let report = Self {
            breed: breed.clone(),
            years: analyzer::years_present(dataset, breed),
            total_registrations: analyzer::total_registrations(dataset, breed),
            yearly_percentages: analyzer::yearly_percentage(dataset, breed)
                .into_iter()
                .map(|(year, percentage)| YearlyShare { year, percentage })
                .collect(),
            overall_percentage: analyzer::overall_percentage(dataset, breed),
            popular_months: analyzer::popular_months(dataset, breed),
        };
        tracing::debug!(
            "Report for {}: {} years, {} registrations",
            report.breed,
            report.years.len(),
            report.total_registrations
        );
        report
    }

    /// Report lines in their fixed order: years, total, each year's share, overall share, months.
    pub fn lines(&self) -> Vec<String> {
        let breed = &self.breed;
        let mut lines = Vec::with_capacity(self.yearly_percentages.len() + 4);

        if self.years.is_empty() {
            lines.push(format!("The {} was never the top breed in any year.", breed));
        } else {
            let years: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
            lines.push(format!(
                "The {} was found in the top breeds for years: {}",
                breed,
                years.join(" ")
            ));
        }

        lines.push(format!(
            "There have been {} {} dogs registered total.",
            self.total_registrations, breed
        ));

        for share in &self.yearly_percentages {
            lines.push(format!(
                "The {} was {:.6}% of top breeds in {}.",
                breed, share.percentage, share.year
            ));
        }

        lines.push(format!(
            "The {} was {:.6}% of top breeds across all years.",
            breed, self.overall_percentage
        ));

        if self.popular_months.is_empty() {
            lines.push(format!("The {} was never registered in any month.", breed));
        } else {
            lines.push(format!(
                "Most popular month(s) for {} dogs: {}",
                breed,
                self.popular_months.join(" ")
            ));
        }

        lines
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
