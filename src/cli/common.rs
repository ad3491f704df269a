//! Shared clap helper types for the CLI.

use anyhow::{Context, Result};
use cardcheck::AnalysisResult;
use clap::ValueEnum;

/// How each analysed line is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Aligned `TYPE: NUMBER (validity)` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormatArg {
    pub fn render(self, result: &AnalysisResult) -> Result<String> {
        match self {
            OutputFormatArg::Text => Ok(result.to_string()),
            OutputFormatArg::Json => serde_json::to_string(result)
                .with_context(|| format!("failed to serialize result for {}", result.number())),
        }
    }
}
