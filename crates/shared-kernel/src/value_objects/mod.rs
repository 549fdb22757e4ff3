// crates/shared-kernel/src/value_objects/mod.rs
pub mod guard_symbol;
pub mod version;

pub use guard_symbol::GuardSymbol;
pub use version::Version;
