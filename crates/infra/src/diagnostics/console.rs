// crates/infra/src/diagnostics/console.rs
use std::{
    io::{self, Write},
    sync::Mutex,
};

use log::debug;
use muembed_domain::guard::MismatchReport;
use muembed_ports::diagnostics::DiagnosticSink;
use muembed_shared_kernel::{InfrastructureError, Result};
use serde::{Deserialize, Serialize};

/// How mismatch warnings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStyle {
    /// `warning: [target] version mismatch for ...`
    #[default]
    Text,
    /// `#pragma message("...")`, as a compiler would show it.
    Pragma,
    /// One JSON object per line.
    Json,
}

/// Prints mismatch warnings to a stream, stderr by default.
///
/// Warnings never fail the run; only a broken stream does.
pub struct ConsoleDiagnostics<W: Write + Send = io::Stderr> {
    style: DiagnosticStyle,
    out: Mutex<W>,
}

impl ConsoleDiagnostics<io::Stderr> {
    pub fn stderr(style: DiagnosticStyle) -> Self {
        Self::new(style, io::stderr())
    }
}

impl<W: Write + Send> ConsoleDiagnostics<W> {
    pub fn new(style: DiagnosticStyle, out: W) -> Self {
        Self { style, out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn line(&self, target: &str, report: &MismatchReport) -> Result<String> {
        Ok(match self.style {
            DiagnosticStyle::Text => format!("warning: [{target}] {report}"),
            DiagnosticStyle::Pragma => format!("{target}: {}", report.pragma_message()),
            DiagnosticStyle::Json => serde_json::to_string(&serde_json::json!({
                "level": "warning",
                "kind": "version-mismatch",
                "target": target,
                "symbol": report.symbol,
                "previous": report.previous,
                "encountered": report.encountered,
                "requested_by": report.requested_by,
            }))?,
        })
    }
}

impl<W: Write + Send> DiagnosticSink for ConsoleDiagnostics<W> {
    fn on_mismatch(&self, target: &str, report: &MismatchReport) -> Result<()> {
        let line = self.line(target, report)?;
        let mut out = self.out.lock().map_err(|_| InfrastructureError::OutputError {
            message: "diagnostic stream lock poisoned".to_string(),
            source: None,
        })?;
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn on_target_complete(&self, target: &str, emitted: usize, skipped: usize) -> Result<()> {
        debug!("target '{target}': {emitted} modules emitted, {skipped} embeds skipped");
        Ok(())
    }
}
