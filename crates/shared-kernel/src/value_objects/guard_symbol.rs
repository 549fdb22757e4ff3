// crates/shared-kernel/src/value_objects/guard_symbol.rs
use std::{borrow::Borrow, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// Include-guard macro name identifying one embeddable module (`MUU_H`, `MUCOSA_H`, ...).
///
/// Always a valid C identifier; anything else is rejected on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct GuardSymbol(String);

impl GuardSymbol {
    pub fn new(symbol: impl Into<String>) -> DomainResult<Self> {
        let symbol = symbol.into();
        validate_identifier(&symbol)?;
        Ok(Self(symbol))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Macro that switches on the implementation section, per mu convention.
    ///
    /// `MUU_H` becomes `MUU_IMPLEMENTATION`; symbols without the `_H` suffix get
    /// `_IMPLEMENTATION` appended.
    #[must_use]
    pub fn implementation_macro(&self) -> String {
        let stem = self.0.strip_suffix("_H").filter(|s| !s.is_empty()).unwrap_or(&self.0);
        format!("{stem}_IMPLEMENTATION")
    }
}

fn validate_identifier(symbol: &str) -> DomainResult<()> {
    let invalid = |reason: &str| DomainError::InvalidGuardSymbol {
        symbol: symbol.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = symbol.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("symbol is empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("must start with an ASCII letter or '_'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    Ok(())
}

impl FromStr for GuardSymbol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for GuardSymbol {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for GuardSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for GuardSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GuardSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuardSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
