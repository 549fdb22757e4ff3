// crates/domain/src/guard/report.rs
use std::fmt;

use muembed_shared_kernel::{GuardSymbol, Version};
use serde::Serialize;

/// A guard symbol was already defined with a different version than the copy
/// about to be embedded. Advisory only; the earlier copy stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    pub symbol: GuardSymbol,
    /// Version recorded by the first inclusion.
    pub previous: Version,
    /// Version carried by the skipped copy.
    pub encountered: Version,
    /// Module whose embeds asked for the skipped copy; `None` for the target itself.
    pub requested_by: Option<GuardSymbol>,
}

impl MismatchReport {
    /// The guide's `#pragma message` rendering of this report.
    pub fn pragma_message(&self) -> String {
        format!("#pragma message(\"{}\")", self.to_string().replace('"', "\\\""))
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version mismatch for {}: embedded {}, requested {}",
            self.symbol, self.previous, self.encountered
        )?;
        if let Some(owner) = &self.requested_by {
            write!(f, " (by {owner})")?;
        }
        Ok(())
    }
}
