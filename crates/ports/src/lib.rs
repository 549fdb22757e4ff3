//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`catalog`]: loading module and target descriptions with their content
//! - [`output`]: writing assembled single-file artifacts
//! - [`diagnostics`]: surfacing version-mismatch warnings and progress
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod diagnostics;
pub mod output;
