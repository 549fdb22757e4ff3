// crates/ports/src/catalog.rs
use std::path::PathBuf;

use muembed_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Dependency reference as written in a catalog; validated by the use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDto {
    pub guard: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// One module version with both content sections already loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecordDto {
    pub guard: String,
    pub version: String,
    pub header: String,
    pub implementation: String,
    #[serde(default)]
    pub embeds: Vec<DependencyDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDto {
    pub name: String,
    pub output: PathBuf,
    #[serde(default)]
    pub embeds: Vec<DependencyDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDto {
    pub modules: Vec<ModuleRecordDto>,
    pub targets: Vec<TargetDto>,
}

/// Port for loading a catalog of modules and targets.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<CatalogDto>;
}
