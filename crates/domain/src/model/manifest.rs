// crates/domain/src/model/manifest.rs
use std::sync::Arc;

use hashbrown::HashSet;
use muembed_shared_kernel::{DomainError, DomainResult};

use super::Module;

/// Ordered list of modules to embed, dependency-first.
///
/// Any sequence is accepted here; the checker copes with repeated guards.
/// Manifests built from a catalog additionally pass
/// [`EmbedManifest::ensure_distinct_direct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedManifest {
    entries: Vec<Arc<Module>>,
}

impl EmbedManifest {
    pub fn new(entries: Vec<Arc<Module>>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Module>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject repeated guard symbols among the direct entries.
    ///
    /// `owner` names whoever declared the manifest and is only used for the error.
    pub fn ensure_distinct_direct(&self, owner: &str) -> DomainResult<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for module in &self.entries {
            if !seen.insert(module.guard().as_str()) {
                return Err(DomainError::DuplicateEmbed {
                    owner: owner.to_string(),
                    symbol: module.guard().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<Arc<Module>> for EmbedManifest {
    fn from_iter<I: IntoIterator<Item = Arc<Module>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EmbedManifest {
    type Item = &'a Arc<Module>;
    type IntoIter = std::slice::Iter<'a, Arc<Module>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
