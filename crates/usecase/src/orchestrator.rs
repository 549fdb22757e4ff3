use log::{debug, info};
use muembed_domain::{
    guard::EmbedGuardChecker,
    render::render_single_file,
    resolve::{Catalog, ManifestResolver, TargetDescriptor},
};
use muembed_ports::{
    catalog::CatalogSource,
    diagnostics::DiagnosticSink,
    output::{AssembledArtifact, AssemblyWriter},
};
use muembed_shared_kernel::{ApplicationError, MuEmbedError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    convert::catalog_from_dto,
    dto::{AssemblyOutput, AssemblyRequest, EmittedModule, TargetReport},
};

/// Assemble every selected target of a catalog into its single-file output.
///
/// Targets are independent: each gets its own resolver and guard state.
/// Version mismatches go to the diagnostic sink and never fail the run.
pub struct AssembleTargets<'a> {
    catalog: &'a dyn CatalogSource,
    writer: &'a dyn AssemblyWriter,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> AssembleTargets<'a> {
    pub fn new(
        catalog: &'a dyn CatalogSource,
        writer: &'a dyn AssemblyWriter,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self { catalog, writer, diagnostics }
    }

    pub fn run(&self, request: &AssemblyRequest) -> Result<AssemblyOutput> {
        let catalog = catalog_from_dto(self.catalog.load()?)?;
        let selected = catalog.select(&request.targets)?;
        info!("assembling {} of {} targets", selected.len(), catalog.targets().len());

        let targets = self.assemble_all(&catalog, &selected, request)?;
        Ok(AssemblyOutput { targets })
    }

    #[cfg(feature = "parallel")]
    fn assemble_all(
        &self,
        catalog: &Catalog,
        selected: &[&TargetDescriptor],
        request: &AssemblyRequest,
    ) -> Result<Vec<TargetReport>> {
        selected.par_iter().map(|target| self.assemble_one(catalog, target, request)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn assemble_all(
        &self,
        catalog: &Catalog,
        selected: &[&TargetDescriptor],
        request: &AssemblyRequest,
    ) -> Result<Vec<TargetReport>> {
        selected.iter().map(|target| self.assemble_one(catalog, target, request)).collect()
    }

    fn assemble_one(
        &self,
        catalog: &Catalog,
        target: &TargetDescriptor,
        request: &AssemblyRequest,
    ) -> Result<TargetReport> {
        let manifest = ManifestResolver::new(catalog.registry()).resolve_target(target).map_err(|err| {
            ApplicationError::ResolutionFailed {
                target: target.name.clone(),
                reason: err.to_string(),
                source: Some(Box::new(err.into())),
            }
        })?;

        let outcome = EmbedGuardChecker::new(request.suppress_mismatch_warnings).process(&manifest);
        for report in &outcome.mismatches {
            self.diagnostics.on_mismatch(&target.name, report)?;
        }

        let content = render_single_file(&target.name, &outcome, &request.render);
        let bytes = content.len();

        if request.dry_run {
            debug!("dry run: not writing '{}'", target.name);
        } else {
            let artifact = AssembledArtifact { target: target.name.clone(), output: target.output.clone(), content };
            self.writer.write(&artifact).map_err(|err| assembly_failed(&target.name, err))?;
        }

        let emitted: Vec<_> = outcome
            .emitted_modules()
            .map(|m| EmittedModule { guard: m.guard().clone(), version: m.version() })
            .collect();
        self.diagnostics.on_target_complete(&target.name, emitted.len(), outcome.skipped.len())?;

        Ok(TargetReport {
            name: target.name.clone(),
            output: target.output.clone(),
            emitted,
            skipped: outcome.skipped,
            mismatches: outcome.mismatches,
            bytes,
            written: !request.dry_run,
        })
    }
}

fn assembly_failed(target: &str, err: MuEmbedError) -> MuEmbedError {
    ApplicationError::AssemblyFailed {
        target: target.to_string(),
        reason: err.to_string(),
        source: Some(Box::new(err)),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Mutex};

    use muembed_domain::guard::MismatchReport;
    use muembed_ports::catalog::{CatalogDto, DependencyDto, ModuleRecordDto, TargetDto};
    use muembed_shared_kernel::InfrastructureError;

    use super::*;

    struct StubCatalog(CatalogDto);

    impl CatalogSource for StubCatalog {
        fn load(&self) -> Result<CatalogDto> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        artifacts: Mutex<Vec<AssembledArtifact>>,
        fail: bool,
    }

    impl AssemblyWriter for RecordingWriter {
        fn write(&self, artifact: &AssembledArtifact) -> Result<()> {
            if self.fail {
                return Err(InfrastructureError::OutputError { message: "disk full".into(), source: None }.into());
            }
            self.artifacts.lock().unwrap().push(artifact.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        mismatches: Mutex<Vec<(String, MismatchReport)>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn on_mismatch(&self, target: &str, report: &MismatchReport) -> Result<()> {
            self.mismatches.lock().unwrap().push((target.to_string(), report.clone()));
            Ok(())
        }
    }

    fn dep(guard: &str, version: &str) -> DependencyDto {
        DependencyDto { guard: guard.into(), version: Some(version.into()) }
    }

    fn record(guard: &str, version: &str, embeds: Vec<DependencyDto>) -> ModuleRecordDto {
        ModuleRecordDto {
            guard: guard.into(),
            version: version.into(),
            header: format!("// {guard} {version} header\n"),
            implementation: format!("// {guard} {version} implementation\n"),
            embeds,
        }
    }

    fn target(name: &str, embeds: Vec<DependencyDto>) -> TargetDto {
        TargetDto { name: name.into(), output: PathBuf::from(format!("{name}.h")), embeds }
    }

    /// MUX 1.0.0 at top level, MUZ embedding its own MUX 1.1.0.
    fn diverging_catalog() -> CatalogDto {
        CatalogDto {
            modules: vec![
                record("MUX_H", "1.0.0", vec![]),
                record("MUX_H", "1.1.0", vec![]),
                record("MUZ_H", "1.0.0", vec![dep("MUX_H", "1.1.0")]),
                record("MUY_H", "2.1.0", vec![dep("MUX_H", "1.0.0")]),
            ],
            targets: vec![
                target("diverging", vec![dep("MUX_H", "1.0.0"), dep("MUZ_H", "1.0.0")]),
                target("clean", vec![dep("MUX_H", "1.0.0"), dep("MUY_H", "2.1.0")]),
            ],
        }
    }

    #[test]
    fn mismatches_are_reported_but_targets_still_written() {
        let catalog = StubCatalog(diverging_catalog());
        let writer = RecordingWriter::default();
        let sink = RecordingSink::default();

        let output = AssembleTargets::new(&catalog, &writer, &sink).run(&AssemblyRequest::default()).unwrap();

        assert_eq!(output.targets.len(), 2);
        assert_eq!(output.targets[0].name, "diverging");
        assert_eq!(output.mismatch_count(), 1);
        assert_eq!(output.targets[0].mismatch_skips(), 1);

        let artifacts = writer.artifacts.lock().unwrap();
        assert_eq!(artifacts.len(), 2);
        let diverging = artifacts.iter().find(|a| a.target == "diverging").unwrap();
        assert!(diverging.content.contains("// MUX_H 1.0.0 header"));
        assert!(!diverging.content.contains("MUX_H 1.1.0"));

        let seen = sink.mismatches.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "diverging");
        assert_eq!(seen[0].1.encountered.to_string(), "1.1.0");
    }

    #[test]
    fn suppression_silences_the_sink() {
        let catalog = StubCatalog(diverging_catalog());
        let writer = RecordingWriter::default();
        let sink = RecordingSink::default();
        let request = AssemblyRequest { suppress_mismatch_warnings: true, ..AssemblyRequest::default() };

        let output = AssembleTargets::new(&catalog, &writer, &sink).run(&request).unwrap();

        assert_eq!(output.mismatch_count(), 0);
        assert_eq!(output.targets[0].mismatch_skips(), 1);
        assert!(sink.mismatches.lock().unwrap().is_empty());
    }

    #[test]
    fn dry_run_skips_the_writer() {
        let catalog = StubCatalog(diverging_catalog());
        let writer = RecordingWriter::default();
        let sink = RecordingSink::default();
        let request = AssemblyRequest { dry_run: true, targets: vec!["clean".into()], ..AssemblyRequest::default() };

        let output = AssembleTargets::new(&catalog, &writer, &sink).run(&request).unwrap();

        assert_eq!(output.targets.len(), 1);
        assert!(!output.targets[0].written);
        assert!(output.targets[0].bytes > 0);
        let emitted: Vec<_> = output.targets[0].emitted.iter().map(|m| m.guard.as_str()).collect();
        assert_eq!(emitted, ["MUX_H", "MUY_H"]);
        assert!(writer.artifacts.lock().unwrap().is_empty());
    }

    #[test]
    fn cycle_fails_resolution_for_that_target() {
        let catalog = StubCatalog(CatalogDto {
            modules: vec![
                record("MUA_H", "1.0.0", vec![dep("MUB_H", "1.0.0")]),
                record("MUB_H", "1.0.0", vec![dep("MUA_H", "1.0.0")]),
            ],
            targets: vec![target("loop", vec![dep("MUA_H", "1.0.0")])],
        });
        let writer = RecordingWriter::default();
        let sink = RecordingSink::default();

        let err = AssembleTargets::new(&catalog, &writer, &sink).run(&AssemblyRequest::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to resolve target 'loop'"), "{message}");
        assert!(message.contains("MUA_H -> MUB_H -> MUA_H"), "{message}");
    }

    #[test]
    fn writer_failure_is_an_error() {
        let catalog = StubCatalog(diverging_catalog());
        let writer = RecordingWriter { fail: true, ..RecordingWriter::default() };
        let sink = RecordingSink::default();

        let err = AssembleTargets::new(&catalog, &writer, &sink).run(&AssemblyRequest::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to assemble target"));
    }

    #[test]
    fn report_serializes_for_plan_output() {
        let catalog = StubCatalog(diverging_catalog());
        let writer = RecordingWriter::default();
        let sink = RecordingSink::default();
        let request = AssemblyRequest { dry_run: true, ..AssemblyRequest::default() };

        let output = AssembleTargets::new(&catalog, &writer, &sink).run(&request).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["targets"][0]["skipped"][0]["reason"], "version-mismatch");
        assert_eq!(json["targets"][0]["mismatches"][0]["previous"], "1.0.0");
    }
}
