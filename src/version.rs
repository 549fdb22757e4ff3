// src/version.rs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
