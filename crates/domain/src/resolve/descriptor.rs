// crates/domain/src/resolve/descriptor.rs
use std::path::PathBuf;

use muembed_shared_kernel::{GuardSymbol, Version};
use serde::{Deserialize, Serialize};

/// Reference from a module or target to one embedded module.
///
/// Without a version the highest registered version of the guard is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRequirement {
    pub guard: GuardSymbol,
    pub version: Option<Version>,
}

impl DependencyRequirement {
    pub fn new(guard: GuardSymbol, version: Option<Version>) -> Self {
        Self { guard, version }
    }

    pub fn exact(guard: GuardSymbol, version: Version) -> Self {
        Self::new(guard, Some(version))
    }

    pub fn latest(guard: GuardSymbol) -> Self {
        Self::new(guard, None)
    }
}

/// Validated catalog entry for one module version, content already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub guard: GuardSymbol,
    pub version: Version,
    pub header: String,
    pub implementation: String,
    pub embeds: Vec<DependencyRequirement>,
}

/// One single-file output and what it embeds, dependency-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    pub name: String,
    pub output: PathBuf,
    pub embeds: Vec<DependencyRequirement>,
}
