// src/app.rs
use anyhow::{Context, Result};
use log::info;
use muembed_infra::{catalog::FileCatalog, diagnostics::ConsoleDiagnostics, output::FsAssemblyWriter};
use muembed_usecase::{AssembleTargets, AssemblyOutput};

use crate::config::AssembleConfig;

/// Wire the file-backed adapters into the use case and run it once.
pub fn run(config: &AssembleConfig) -> Result<AssemblyOutput> {
    let catalog = FileCatalog::new(&config.catalog);
    let writer = if config.to_stdout { FsAssemblyWriter::stdout() } else { FsAssemblyWriter::new(&config.out_dir) };
    let diagnostics = ConsoleDiagnostics::stderr(config.diagnostics);

    info!("catalog: {}", config.catalog.display());
    AssembleTargets::new(&catalog, &writer, &diagnostics)
        .run(&config.request())
        .with_context(|| format!("failed to assemble from '{}'", config.catalog.display()))
}
