// crates/domain/src/guard/checker.rs
use std::sync::Arc;

use log::{debug, trace};
use muembed_shared_kernel::{GuardSymbol, Version};
use serde::Serialize;

use super::{GuardState, GuardStatus, MismatchReport};
use crate::model::{EmbedManifest, Module};

/// Which half of a module a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Implementation,
}

impl Section {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Implementation => "implementation",
        }
    }
}

/// One piece of emitted content, in processing order.
#[derive(Debug, Clone)]
pub struct EmittedBlock {
    module: Arc<Module>,
    section: Section,
}

impl EmittedBlock {
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn guard(&self) -> &GuardSymbol {
        self.module.guard()
    }

    pub fn version(&self) -> Version {
        self.module.version()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn content(&self) -> &str {
        match self.section {
            Section::Header => self.module.header(),
            Section::Implementation => self.module.implementation(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    AlreadySatisfied,
    VersionMismatch,
}

/// A copy that was not emitted because its guard was already defined.
///
/// Recorded whether or not mismatch warnings are suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEmbed {
    pub symbol: GuardSymbol,
    pub version: Version,
    pub previous: Version,
    pub reason: SkipReason,
    pub requested_by: Option<GuardSymbol>,
}

/// Everything one pass over a manifest produced.
#[derive(Debug, Clone, Default)]
pub struct EmbedOutcome {
    pub emitted: Vec<EmittedBlock>,
    pub skipped: Vec<SkippedEmbed>,
    pub mismatches: Vec<MismatchReport>,
}

impl EmbedOutcome {
    /// Emitted content concatenated in processing order.
    pub fn content(&self) -> String {
        let capacity = self.emitted.iter().map(|b| b.content().len()).sum();
        self.emitted.iter().fold(String::with_capacity(capacity), |mut acc, block| {
            acc.push_str(block.content());
            acc
        })
    }

    /// Modules that were emitted, once each, in emission order.
    pub fn emitted_modules(&self) -> impl Iterator<Item = &Module> + '_ {
        self.emitted
            .iter()
            .filter(|b| b.section == Section::Header)
            .map(EmittedBlock::module)
    }
}

/// Decides, per module of a manifest, whether to emit or skip it and whether a
/// version mismatch should be reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedGuardChecker {
    suppress_mismatch_warnings: bool,
}

impl EmbedGuardChecker {
    pub const fn new(suppress_mismatch_warnings: bool) -> Self {
        Self { suppress_mismatch_warnings }
    }

    /// Run one pass over `manifest` with a fresh guard state.
    pub fn process(&self, manifest: &EmbedManifest) -> EmbedOutcome {
        let mut state = GuardState::new();
        let mut outcome = EmbedOutcome::default();
        self.process_with_state(manifest, &mut state, &mut outcome);
        outcome
    }

    /// Run over `manifest` against caller-owned state, appending to `outcome`.
    ///
    /// Lets a caller pre-seed guards that some earlier part of the compilation
    /// unit already defined.
    pub fn process_with_state(
        &self,
        manifest: &EmbedManifest,
        state: &mut GuardState,
        outcome: &mut EmbedOutcome,
    ) {
        self.walk(manifest, None, state, outcome);
    }

    fn walk(
        &self,
        manifest: &EmbedManifest,
        requested_by: Option<&GuardSymbol>,
        state: &mut GuardState,
        outcome: &mut EmbedOutcome,
    ) {
        for module in manifest {
            let guard = module.guard();
            let version = module.version();

            match state.status(guard) {
                GuardStatus::Unseen => {
                    // Defined before nested content, like `#define X_H` right after `#ifndef X_H`.
                    state.record(guard, version);
                    trace!("embedding {guard} {version}");
                    self.walk(module.embeds(), Some(guard), state, outcome);
                    outcome.emitted.push(EmittedBlock { module: Arc::clone(module), section: Section::Header });
                    outcome
                        .emitted
                        .push(EmittedBlock { module: Arc::clone(module), section: Section::Implementation });
                }
                GuardStatus::Seen(previous) => {
                    let reason = if previous == version {
                        SkipReason::AlreadySatisfied
                    } else {
                        SkipReason::VersionMismatch
                    };
                    debug!("skipping {guard} {version}: already defined by {previous}");

                    outcome.skipped.push(SkippedEmbed {
                        symbol: guard.clone(),
                        version,
                        previous,
                        reason,
                        requested_by: requested_by.cloned(),
                    });

                    if reason == SkipReason::VersionMismatch && !self.suppress_mismatch_warnings {
                        outcome.mismatches.push(MismatchReport {
                            symbol: guard.clone(),
                            previous,
                            encountered: version,
                            requested_by: requested_by.cloned(),
                        });
                    }
                }
            }
        }
    }
}
