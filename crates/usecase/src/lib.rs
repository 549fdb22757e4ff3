//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement:
//!
//! - [`orchestrator`]: resolve, check, render and write every selected target
//! - [`dto`]: request and report types for the use case boundary
//! - [`convert`]: validation of catalog DTOs into domain descriptors
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod convert;
pub mod dto;
pub mod orchestrator;

pub use dto::{AssemblyOutput, AssemblyRequest, EmittedModule, TargetReport};
pub use orchestrator::AssembleTargets;
