//! # Infrastructure
//!
//! Adapters behind the ports: catalog files on disk, header metadata
//! scanning, artifact output and console diagnostics.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod diagnostics;
pub mod output;
pub mod persistence;
pub mod scan;
