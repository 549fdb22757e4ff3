//! # Domain
//!
//! Embeddable modules, their manifests and the include-guard protocol that
//! decides what ends up in an assembled single-file library.
//!
//! - [`model`]: `Module` and `EmbedManifest`
//! - [`guard`]: guard state, mismatch reports and the embed-guard checker
//! - [`resolve`]: catalog descriptors and manifest resolution
//! - [`render`]: single-file output layout

#![allow(clippy::multiple_crate_versions)]

pub mod guard;
pub mod model;
pub mod render;
pub mod resolve;
