// crates/domain/src/model/module.rs
use std::sync::Arc;

use muembed_shared_kernel::{GuardSymbol, Version};

use super::EmbedManifest;

/// One embeddable library unit: guard, version, both content sections and
/// the modules it embeds itself.
///
/// Modules are immutable once built and shared through `Arc`, so a module
/// tree can never contain itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    guard: GuardSymbol,
    version: Version,
    header: String,
    implementation: String,
    embeds: EmbedManifest,
}

impl Module {
    pub fn new(
        guard: GuardSymbol,
        version: Version,
        header: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        Self {
            guard,
            version,
            header: header.into(),
            implementation: implementation.into(),
            embeds: EmbedManifest::default(),
        }
    }

    /// Attach the module's own embedded dependencies, in dependency-first order.
    #[must_use]
    pub fn with_embeds(mut self, embeds: EmbedManifest) -> Self {
        self.embeds = embeds;
        self
    }

    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn guard(&self) -> &GuardSymbol {
        &self.guard
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    pub fn embeds(&self) -> &EmbedManifest {
        &self.embeds
    }
}
