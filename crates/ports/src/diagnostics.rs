// crates/ports/src/diagnostics.rs
use muembed_domain::guard::MismatchReport;
use muembed_shared_kernel::Result;

/// Port receiving non-fatal findings while targets are assembled.
///
/// Implementations must not turn a mismatch into a failure; the returned
/// error is reserved for the sink itself failing (e.g. a closed stream).
pub trait DiagnosticSink: Send + Sync {
    fn on_mismatch(&self, target: &str, report: &MismatchReport) -> Result<()>;

    fn on_target_complete(&self, _target: &str, _emitted: usize, _skipped: usize) -> Result<()> {
        Ok(())
    }
}
