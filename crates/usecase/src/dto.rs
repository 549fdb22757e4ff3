// crates/usecase/src/dto.rs
use std::path::PathBuf;

use muembed_domain::{
    guard::{MismatchReport, SkipReason, SkippedEmbed},
    render::RenderOptions,
};
use muembed_shared_kernel::{GuardSymbol, Version};
use serde::Serialize;

/// What to assemble and how.
#[derive(Debug, Clone, Default)]
pub struct AssemblyRequest {
    /// Target names to assemble; empty means every target in the catalog.
    pub targets: Vec<String>,
    pub suppress_mismatch_warnings: bool,
    /// Resolve, check and render, but never hand artifacts to the writer.
    pub dry_run: bool,
    pub render: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedModule {
    pub guard: GuardSymbol,
    pub version: Version,
}

/// Per-target result, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub name: String,
    pub output: PathBuf,
    pub emitted: Vec<EmittedModule>,
    pub skipped: Vec<SkippedEmbed>,
    pub mismatches: Vec<MismatchReport>,
    pub bytes: usize,
    pub written: bool,
}

impl TargetReport {
    pub fn mismatch_skips(&self) -> usize {
        self.skipped.iter().filter(|s| s.reason == SkipReason::VersionMismatch).count()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssemblyOutput {
    pub targets: Vec<TargetReport>,
}

impl AssemblyOutput {
    pub fn mismatch_count(&self) -> usize {
        self.targets.iter().map(|t| t.mismatches.len()).sum()
    }
}
