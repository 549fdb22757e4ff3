mod args;
mod value_enum;

pub use args::{Args, Command};
use clap::Parser;
use muembed_shared_kernel::{PresentationError, Result};

use crate::config::AssembleConfig;

/// Parse process arguments into a validated configuration.
pub fn load_config() -> Result<AssembleConfig> {
    config_from_args(Args::parse())
}

pub fn config_from_args(args: Args) -> Result<AssembleConfig> {
    validate_targets(&args.target)?;
    Ok(AssembleConfig::try_from(args)?)
}

fn validate_targets(targets: &[String]) -> Result<()> {
    if let Some(bad) = targets.iter().find(|t| t.trim().is_empty()) {
        return Err(PresentationError::InvalidValue {
            flag: "--target".to_string(),
            value: bad.clone(),
            reason: "target name must not be empty".to_string(),
        }
        .into());
    }
    Ok(())
}
