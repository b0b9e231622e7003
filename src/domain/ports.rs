use crate::domain::model::Dataset;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Where the registration table comes from.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider {
    fn data_path(&self) -> &str;
    fn sheet_name(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    /// A breed given up front skips the interactive prompt.
    fn preselected_breed(&self) -> Option<&str>;
}
