// crates/domain/src/resolve/catalog.rs
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use muembed_shared_kernel::{DomainError, DomainResult};

use super::{ModuleDescriptor, ModuleRegistry, TargetDescriptor};

/// Registry plus the targets to assemble from it, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    registry: ModuleRegistry,
    targets: Vec<TargetDescriptor>,
}

impl Catalog {
    pub fn new(modules: Vec<ModuleDescriptor>, targets: Vec<TargetDescriptor>) -> DomainResult<Self> {
        let registry = ModuleRegistry::from_descriptors(modules)?;

        Self::ensure_distinct_targets(&targets)?;
        Ok(Self { registry, targets })
    }

    /// Target names and output paths must both be unique.
    fn ensure_distinct_targets(targets: &[TargetDescriptor]) -> DomainResult<()> {
        let mut names = HashSet::with_capacity(targets.len());
        if let Some(dup) = targets.iter().find(|t| !names.insert(t.name.as_str())) {
            return Err(DomainError::DuplicateTarget { name: dup.name.clone() });
        }

        let mut outputs: HashMap<&Path, &str> = HashMap::with_capacity(targets.len());
        for target in targets {
            if let Some(first) = outputs.insert(target.output.as_path(), target.name.as_str()) {
                return Err(DomainError::DuplicateOutput {
                    path: target.output.display().to_string(),
                    first: first.to_string(),
                    second: target.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }

    /// Targets named in `names`, in catalog order; all targets when `names` is empty.
    pub fn select(&self, names: &[String]) -> DomainResult<Vec<&TargetDescriptor>> {
        if let Some(missing) = names.iter().find(|n| !self.targets.iter().any(|t| &t.name == *n)) {
            return Err(DomainError::UnknownTarget { name: missing.clone() });
        }

        Ok(self
            .targets
            .iter()
            .filter(|t| names.is_empty() || names.contains(&t.name))
            .collect())
    }
}
