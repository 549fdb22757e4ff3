//! Include-guard bookkeeping and the embed-guard checker.
//!
//! The checker walks an [`EmbedManifest`](crate::model::EmbedManifest)
//! dependency-first. The first copy of a guard symbol wins; later copies are
//! skipped, and a later copy carrying a different version is reported as a
//! [`MismatchReport`] unless warnings are suppressed. Nothing here fails.

pub mod checker;
pub mod report;
pub mod state;

pub use checker::{EmbedGuardChecker, EmbedOutcome, EmittedBlock, Section, SkipReason, SkippedEmbed};
pub use report::MismatchReport;
pub use state::{GuardState, GuardStatus};
