use crate::core::prompt::prompt_breed;
use crate::core::report::{BreedReport, BANNER};
use crate::domain::model::BreedSelection;
use crate::domain::ports::{DatasetSource, OutputFormat};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Runs one analysis: load the data, pick a breed, compute and print the report.
pub struct AnalysisEngine<S: DatasetSource> {
    source: S,
    format: OutputFormat,
    preselected_breed: Option<String>,
}

impl<S: DatasetSource> AnalysisEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            format: OutputFormat::Text,
            preselected_breed: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_breed(mut self, breed: Option<String>) -> Self {
        self.preselected_breed = breed;
        self
    }

    /// Prompts go to `output` in text mode and to stderr in JSON mode.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<BreedReport> {
        self.run_with_prompts(input, output, &mut std::io::stderr())
    }

    /// Like `run`, with an explicit writer for prompts in JSON mode so stdout stays parseable.
    pub fn run_with_prompts<R: BufRead, W: Write, P: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompts: &mut P,
    ) -> Result<BreedReport> {
        tracing::info!("Loading registrations from {}", self.source.describe());
        let dataset = self.source.load()?;
        let valid_breeds = dataset.breed_names();
        tracing::info!(
            "{} records, {} distinct breeds",
            dataset.len(),
            valid_breeds.len()
        );
        if dataset.is_empty() {
            tracing::warn!("{} contains no registration records", self.source.describe());
        }

        if self.format == OutputFormat::Text {
            writeln!(output, "{}", BANNER)?;
        }

        // 指定品種時不再互動詢問，找不到就直接失敗
        let breed = match (&self.preselected_breed, self.format) {
            (Some(name), _) => BreedSelection::parse(name, &valid_breeds)?,
            (None, OutputFormat::Text) => prompt_breed(input, output, &valid_breeds)?,
            (None, OutputFormat::Json) => prompt_breed(input, prompts, &valid_breeds)?,
        };

        let report = BreedReport::build(&dataset, &breed);
        match self.format {
            OutputFormat::Text => report.write_text(output)?,
            OutputFormat::Json => report.write_json(output)?,
        }
        output.flush()?;

        Ok(report)
    }
}
