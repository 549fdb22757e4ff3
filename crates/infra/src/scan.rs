pub mod header_metadata;

pub use header_metadata::{HeaderMetadata, HeaderMetadataScanner};
