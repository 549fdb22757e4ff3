pub mod manifest;
pub mod module;

pub use manifest::EmbedManifest;
pub use module::Module;
