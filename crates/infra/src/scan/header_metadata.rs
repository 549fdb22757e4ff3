// crates/infra/src/scan/header_metadata.rs
use std::sync::LazyLock;

use muembed_shared_kernel::{GuardSymbol, Version};
use regex::Regex;

static IFNDEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]*ifndef[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*$").unwrap());

static DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+([A-Za-z_][A-Za-z0-9_]*)\b").unwrap());

static VERSION_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+([A-Za-z_][A-Za-z0-9_]*)_VERSION_(MAJOR|MINOR|PATCH)[ \t]+(\d+)").unwrap()
});

/// Guard and version found in a header, either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMetadata {
    pub guard: Option<GuardSymbol>,
    pub version: Option<Version>,
}

/// Infers module metadata from mu-style header text.
///
/// The guard is the first `#ifndef X` whose symbol is later `#define`d. The
/// version comes from `<PREFIX>_VERSION_MAJOR/MINOR/PATCH` macros, preferring
/// the prefix matching the guard stem; `MAJOR` is required, the others
/// default to 0.
pub struct HeaderMetadataScanner;

impl HeaderMetadataScanner {
    pub fn scan(text: &str) -> HeaderMetadata {
        let guard = Self::guard(text);
        let version = Self::version(text, guard.as_ref());
        HeaderMetadata { guard, version }
    }

    pub fn guard(text: &str) -> Option<GuardSymbol> {
        IFNDEF.captures_iter(text).find_map(|cap| {
            let symbol = cap.get(1)?;
            let defined_later = DEFINE
                .captures_iter(&text[symbol.end()..])
                .any(|d| d.get(1).is_some_and(|m| m.as_str() == symbol.as_str()));
            defined_later.then(|| GuardSymbol::new(symbol.as_str()).ok()).flatten()
        })
    }

    pub fn version(text: &str, guard: Option<&GuardSymbol>) -> Option<Version> {
        let mut found: Vec<(&str, &str, u32)> = Vec::new();
        for cap in VERSION_MACRO.captures_iter(text) {
            let (Some(prefix), Some(part), Some(value)) = (cap.get(1), cap.get(2), cap.get(3)) else {
                continue;
            };
            if let Ok(value) = value.as_str().parse() {
                found.push((prefix.as_str(), part.as_str(), value));
            }
        }

        let preferred = guard.map(|g| g.as_str().strip_suffix("_H").unwrap_or(g.as_str()));
        let prefix = preferred
            .filter(|p| found.iter().any(|(fp, part, _)| fp == p && *part == "MAJOR"))
            .or_else(|| found.iter().find(|(_, part, _)| *part == "MAJOR").map(|(p, _, _)| *p))?;

        let component = |name: &str| {
            found.iter().find(|(p, part, _)| *p == prefix && *part == name).map(|(_, _, v)| *v)
        };
        Some(Version::new(component("MAJOR")?, component("MINOR").unwrap_or(0), component("PATCH").unwrap_or(0)))
    }
}
