pub mod sink;
pub mod writer;

pub use sink::OutputSink;
pub use writer::FsAssemblyWriter;
