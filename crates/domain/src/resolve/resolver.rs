// crates/domain/src/resolve/resolver.rs
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use log::debug;
use muembed_shared_kernel::{DomainError, DomainResult, GuardSymbol, Version};

use super::{DependencyRequirement, ModuleRegistry, TargetDescriptor};
use crate::model::{EmbedManifest, Module};

/// Builds [`EmbedManifest`]s from registry entries.
///
/// Resolved modules are cached per guard and version, so a module embedded by
/// several others is built once and shared. Cycles are detected by guard
/// symbol: a module that (transitively) embeds any copy of its own guard is
/// rejected. A cached module is only reused when none of the guards below it
/// is on the current path, so the verdict does not depend on embed order.
pub struct ManifestResolver<'a> {
    registry: &'a ModuleRegistry,
    resolved: HashMap<(GuardSymbol, Version), Resolved>,
}

struct Resolved {
    module: Arc<Module>,
    /// Every guard in the module's subtree, its own included.
    guards: HashSet<GuardSymbol>,
}

impl<'a> ManifestResolver<'a> {
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry, resolved: HashMap::new() }
    }

    pub fn resolve_target(&mut self, target: &TargetDescriptor) -> DomainResult<EmbedManifest> {
        let mut path = Vec::new();
        let manifest = self.resolve_all(&target.embeds, &mut path)?;
        manifest.ensure_distinct_direct(&target.name)?;
        debug!("resolved target '{}' with {} direct embeds", target.name, manifest.len());
        Ok(manifest)
    }

    fn resolve_all(
        &mut self,
        requirements: &[DependencyRequirement],
        path: &mut Vec<GuardSymbol>,
    ) -> DomainResult<EmbedManifest> {
        requirements.iter().map(|req| self.resolve_one(req, path)).collect()
    }

    fn resolve_one(
        &mut self,
        requirement: &DependencyRequirement,
        path: &mut Vec<GuardSymbol>,
    ) -> DomainResult<Arc<Module>> {
        let descriptor = self.registry.lookup(requirement)?;

        if let Some(start) = path.iter().position(|g| *g == descriptor.guard) {
            let mut cycle: Vec<String> = path[start..].iter().map(ToString::to_string).collect();
            cycle.push(descriptor.guard.to_string());
            return Err(DomainError::DependencyCycle { path: cycle });
        }

        let key = (descriptor.guard.clone(), descriptor.version);
        if let Some(hit) = self.resolved.get(&key) {
            if !path.iter().any(|g| hit.guards.contains(g)) {
                return Ok(Arc::clone(&hit.module));
            }
            // Reachable from the current path: walk again so the cycle is reported.
        }

        path.push(descriptor.guard.clone());
        let embeds = self.resolve_all(&descriptor.embeds, path);
        path.pop();
        let embeds = embeds?;
        embeds.ensure_distinct_direct(descriptor.guard.as_str())?;

        let module = Module::new(
            descriptor.guard.clone(),
            descriptor.version,
            descriptor.header.clone(),
            descriptor.implementation.clone(),
        )
        .with_embeds(embeds)
        .into_shared();

        let mut guards = HashSet::new();
        guards.insert(descriptor.guard.clone());
        for child in module.embeds() {
            if let Some(resolved) = self.resolved.get(&(child.guard().clone(), child.version())) {
                guards.extend(resolved.guards.iter().cloned());
            }
        }

        self.resolved.insert(key, Resolved { module: Arc::clone(&module), guards });
        Ok(module)
    }
}
