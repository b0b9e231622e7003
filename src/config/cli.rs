use crate::config::toml_config::TomlConfig;
use crate::config::{CliConfig, Settings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl Settings {
    /// CLI flags win over the TOML file, which wins over the defaults.
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Settings::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            data_path: cli
                .data
                .clone()
                .or(file.data.path.clone())
                .unwrap_or(defaults.data_path),
            sheet: cli.sheet.clone().or(file.data.sheet.clone()),
            breed: cli.breed.clone().or(file.report.breed.clone()),
            format: cli.format.or(file.report.format).unwrap_or(defaults.format),
            verbose: cli.verbose,
            log_level: file.logging.level.clone(),
            json_logs: cli.json_logs || file.json_logs(),
        }
    }

    /// Reads and validates the `--config` file when one was given.
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                // 檔案中的錯誤值即使被 CLI 覆蓋也要回報
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(Self::resolve(cli, file.as_ref()))
    }
}
