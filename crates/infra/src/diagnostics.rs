pub mod console;

pub use console::{ConsoleDiagnostics, DiagnosticStyle};
