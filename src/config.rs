// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use muembed_domain::render::{Layout, RenderOptions};
use muembed_infra::diagnostics::DiagnosticStyle;
use muembed_shared_kernel::PresentationError;
use muembed_usecase::AssemblyRequest;

use crate::cli::{Args, Command};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Assemble,
    Check,
    Plan,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Self {
        match command {
            Command::Assemble => Self::Assemble,
            Command::Check => Self::Check,
            Command::Plan => Self::Plan,
        }
    }
}

/// Output format of the `plan` report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct AssembleConfig {
    #[builder(default)]
    pub mode: Mode,
    #[builder(default = "PathBuf::from(\"muembed.yaml\")")]
    pub catalog: PathBuf,
    #[builder(default)]
    pub targets: Vec<String>,
    #[builder(default)]
    pub suppress_mismatch_warnings: bool,
    #[builder(default)]
    pub diagnostics: DiagnosticStyle,
    #[builder(default)]
    pub layout: Layout,
    #[builder(default)]
    pub annotate_mismatches: bool,
    #[builder(default = "PathBuf::from(\".\")")]
    pub out_dir: PathBuf,
    #[builder(default)]
    pub to_stdout: bool,
    #[builder(default)]
    pub report_format: ReportFormat,
    #[builder(default = "log::LevelFilter::Warn")]
    pub log_level: log::LevelFilter,
    #[builder(default)]
    pub quiet: bool,
}

impl AssembleConfig {
    /// Use case request for this configuration; `check` and `plan` never write.
    pub fn request(&self) -> AssemblyRequest {
        AssemblyRequest {
            targets: self.targets.clone(),
            suppress_mismatch_warnings: self.suppress_mismatch_warnings,
            dry_run: self.mode != Mode::Assemble,
            render: RenderOptions {
                layout: self.layout,
                annotate_mismatches: self.annotate_mismatches,
                generator: format!("muembed {}", crate::VERSION),
            },
        }
    }
}

impl TryFrom<Args> for AssembleConfig {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let log_level = if args.quiet { log::LevelFilter::Error } else { level_from_verbosity(args.verbose) };

        AssembleConfigBuilder::default()
            .mode(Mode::from(args.selected_command()))
            .catalog(args.catalog)
            .targets(args.target)
            .suppress_mismatch_warnings(args.no_version_check)
            .diagnostics(DiagnosticStyle::from(args.diagnostics))
            .layout(Layout::from(args.layout))
            .annotate_mismatches(args.annotate_mismatches)
            .out_dir(args.out_dir)
            .to_stdout(args.stdout)
            .report_format(ReportFormat::from(args.format))
            .log_level(log_level)
            .quiet(args.quiet)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

const fn level_from_verbosity(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
