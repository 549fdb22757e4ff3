// crates/usecase/src/convert.rs
use muembed_domain::resolve::{Catalog, DependencyRequirement, ModuleDescriptor, TargetDescriptor};
use muembed_ports::catalog::{CatalogDto, DependencyDto, ModuleRecordDto, TargetDto};
use muembed_shared_kernel::{DomainResult, ErrorContext, GuardSymbol, Result, Version};

/// Validate a loaded catalog and build the domain view of it.
pub fn catalog_from_dto(dto: CatalogDto) -> Result<Catalog> {
    let modules = dto
        .modules
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let label = format!("module #{} ({})", idx + 1, record.guard);
            module_from_dto(record).context(label)
        })
        .collect::<Result<Vec<_>>>()?;

    let targets = dto
        .targets
        .into_iter()
        .map(|target| {
            let label = format!("target '{}'", target.name);
            target_from_dto(target).context(label)
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::new(modules, targets).context("building catalog")
}

fn module_from_dto(record: ModuleRecordDto) -> DomainResult<ModuleDescriptor> {
    Ok(ModuleDescriptor {
        guard: GuardSymbol::new(record.guard)?,
        version: record.version.parse()?,
        header: record.header,
        implementation: record.implementation,
        embeds: requirements_from_dto(record.embeds)?,
    })
}

fn target_from_dto(target: TargetDto) -> DomainResult<TargetDescriptor> {
    Ok(TargetDescriptor {
        name: target.name,
        output: target.output,
        embeds: requirements_from_dto(target.embeds)?,
    })
}

fn requirements_from_dto(deps: Vec<DependencyDto>) -> DomainResult<Vec<DependencyRequirement>> {
    deps.into_iter()
        .map(|dep| {
            let version = dep.version.as_deref().map(str::parse::<Version>).transpose()?;
            Ok(DependencyRequirement::new(GuardSymbol::new(dep.guard)?, version))
        })
        .collect()
}
