// crates/infra/src/catalog/file_catalog.rs
use std::path::{Path, PathBuf};

use log::debug;
use muembed_ports::catalog::{CatalogDto, CatalogSource, DependencyDto, ModuleRecordDto, TargetDto};
use muembed_shared_kernel::{ErrorContext, InfraResult, InfrastructureError, Result};
use serde::Deserialize;

use crate::{persistence::FileReader, scan::HeaderMetadataScanner};

/// Catalog stored as a YAML or JSON file.
///
/// Content paths are relative to the catalog's directory. A module may omit
/// `guard` and `version`; they are then read from its header text.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    modules: Vec<RawModule>,
    #[serde(default)]
    targets: Vec<RawTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModule {
    guard: Option<String>,
    version: Option<String>,
    header: Option<PathBuf>,
    header_text: Option<String>,
    implementation: Option<PathBuf>,
    implementation_text: Option<String>,
    #[serde(default)]
    embeds: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTarget {
    name: String,
    output: PathBuf,
    #[serde(default)]
    embeds: Vec<RawDependency>,
}

/// `"MUU_H"`, `"MUU_H@1.0.0"` or `{ guard, version }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDependency {
    Short(String),
    Full(DependencyDto),
}

impl From<RawDependency> for DependencyDto {
    fn from(raw: RawDependency) -> Self {
        match raw {
            RawDependency::Full(dto) => dto,
            RawDependency::Short(s) => match s.split_once('@') {
                Some((guard, version)) => {
                    DependencyDto { guard: guard.trim().to_string(), version: Some(version.trim().to_string()) }
                }
                None => DependencyDto { guard: s.trim().to_string(), version: None },
            },
        }
    }
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn format(&self) -> InfraResult<CatalogFormat> {
        let ext = self.path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(CatalogFormat::Yaml),
            _ => Err(InfrastructureError::UnsupportedCatalogFormat { path: self.path.clone() }),
        }
    }

    fn parse(&self, text: &str) -> InfraResult<RawCatalog> {
        match self.format()? {
            CatalogFormat::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            CatalogFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    fn load_section(&self, path: Option<&Path>, inline: Option<String>) -> InfraResult<(String, Option<PathBuf>)> {
        match (path, inline) {
            (_, Some(text)) => Ok((text, None)),
            (Some(rel), None) => {
                let full = self.base_dir().join(rel);
                Ok((FileReader::read_source(&full)?, Some(full)))
            }
            (None, None) => Ok((String::new(), None)),
        }
    }

    fn load_module(&self, raw: RawModule) -> InfraResult<ModuleRecordDto> {
        let (header, header_path) = self.load_section(raw.header.as_deref(), raw.header_text)?;
        let (implementation, _) = self.load_section(raw.implementation.as_deref(), raw.implementation_text)?;

        let missing = |what: &str| InfrastructureError::MetadataNotFound {
            what: what.to_string(),
            path: header_path.clone().unwrap_or_else(|| self.path.clone()),
        };

        let scanned = if raw.guard.is_none() || raw.version.is_none() {
            HeaderMetadataScanner::scan(&header)
        } else {
            Default::default()
        };

        let guard = match raw.guard {
            Some(g) => g,
            None => scanned.guard.map(|g| g.into_string()).ok_or_else(|| missing("guard symbol"))?,
        };
        let version = match raw.version {
            Some(v) => v,
            None => scanned.version.map(|v| v.to_string()).ok_or_else(|| missing("version"))?,
        };

        debug!("catalog module {guard} {version} ({} + {} bytes)", header.len(), implementation.len());
        Ok(ModuleRecordDto {
            guard,
            version,
            header,
            implementation,
            embeds: raw.embeds.into_iter().map(DependencyDto::from).collect(),
        })
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<CatalogDto> {
        let context = || format!("loading catalog '{}'", self.path.display());

        let text = FileReader::read_to_string(&self.path).with_context(context)?;
        let raw = self.parse(&text).with_context(context)?;

        let modules = raw
            .modules
            .into_iter()
            .map(|m| self.load_module(m))
            .collect::<InfraResult<Vec<_>>>()
            .with_context(context)?;

        let targets = raw
            .targets
            .into_iter()
            .map(|t| TargetDto {
                name: t.name,
                output: t.output,
                embeds: t.embeds.into_iter().map(DependencyDto::from).collect(),
            })
            .collect();

        Ok(CatalogDto { modules, targets })
    }
}
