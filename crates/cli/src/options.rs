use clap::ValueEnum;
use invalid_ids_engine::options::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// 合計値のみ表示（--breakdown 指定時は範囲ごとの表）
    #[default]
    Plain,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => Self::Plain,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
        }
    }
}

impl From<OutputFormat> for CliOutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}
