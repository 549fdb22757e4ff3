// crates/domain/src/resolve/registry.rs
use std::collections::BTreeMap;

use hashbrown::HashMap;
use muembed_shared_kernel::{DomainError, DomainResult, GuardSymbol, Version};

use super::{DependencyRequirement, ModuleDescriptor};

/// Every known module version, keyed by guard symbol and version.
///
/// Several versions of one guard may coexist: a library that embeds its own
/// copy of a dependency contributes that copy as a separate entry.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<GuardSymbol, BTreeMap<Version, ModuleDescriptor>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ModuleDescriptor>) -> DomainResult<Self> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: ModuleDescriptor) -> DomainResult<()> {
        let versions = self.modules.entry(descriptor.guard.clone()).or_default();
        if versions.contains_key(&descriptor.version) {
            return Err(DomainError::DuplicateModule {
                symbol: descriptor.guard.to_string(),
                version: descriptor.version.to_string(),
            });
        }
        versions.insert(descriptor.version, descriptor);
        Ok(())
    }

    /// Find the descriptor a requirement points at.
    pub fn lookup(&self, requirement: &DependencyRequirement) -> DomainResult<&ModuleDescriptor> {
        let unknown = || DomainError::UnknownModule {
            symbol: requirement.guard.to_string(),
            version: requirement.version.map(|v| v.to_string()),
        };

        let versions = self.modules.get(&requirement.guard).ok_or_else(unknown)?;
        match requirement.version {
            Some(version) => versions.get(&version).ok_or_else(unknown),
            None => versions.values().next_back().ok_or_else(unknown),
        }
    }

    pub fn len(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
