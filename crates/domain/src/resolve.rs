pub mod catalog;
pub mod descriptor;
pub mod registry;
pub mod resolver;

pub use catalog::Catalog;
pub use descriptor::{DependencyRequirement, ModuleDescriptor, TargetDescriptor};
pub use registry::ModuleRegistry;
pub use resolver::ManifestResolver;
