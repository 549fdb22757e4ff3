// crates/domain/src/guard/state.rs
use hashbrown::HashMap;
use muembed_shared_kernel::{GuardSymbol, Version};

/// What the guard table knows about one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStatus {
    Unseen,
    Seen(Version),
}

/// Guard symbols defined so far within one compilation unit, with the version
/// that defined them.
///
/// A symbol moves from unseen to seen exactly once and never changes
/// afterwards. One state belongs to one pass over one target.
#[derive(Debug, Clone, Default)]
pub struct GuardState {
    versions: HashMap<GuardSymbol, Version>,
}

impl GuardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, guard: &GuardSymbol) -> GuardStatus {
        self.versions.get(guard).copied().map_or(GuardStatus::Unseen, GuardStatus::Seen)
    }

    /// Define `guard` with `version`. Returns `false` and leaves the state
    /// untouched when the symbol is already defined.
    pub fn record(&mut self, guard: &GuardSymbol, version: Version) -> bool {
        if self.versions.contains_key(guard) {
            return false;
        }
        self.versions.insert(guard.clone(), version);
        true
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
