use clap::ValueEnum;
use muembed_domain::render::Layout;
use muembed_infra::diagnostics::DiagnosticStyle;

use crate::config::ReportFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliDiagnosticStyle {
    Text,
    Pragma,
    Json,
}

impl From<CliDiagnosticStyle> for DiagnosticStyle {
    fn from(value: CliDiagnosticStyle) -> Self {
        match value {
            CliDiagnosticStyle::Text => DiagnosticStyle::Text,
            CliDiagnosticStyle::Pragma => DiagnosticStyle::Pragma,
            CliDiagnosticStyle::Json => DiagnosticStyle::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliLayout {
    Sectioned,
    Interleaved,
}

impl From<CliLayout> for Layout {
    fn from(value: CliLayout) -> Self {
        match value {
            CliLayout::Sectioned => Layout::Sectioned,
            CliLayout::Interleaved => Layout::Interleaved,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportFormat {
    Table,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Table => ReportFormat::Table,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}
