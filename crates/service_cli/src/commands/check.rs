//! Check command implementation
//!
//! Prints the resolved configuration.

use crate::config::CliConfig;
use crate::Result;

/// Resolved configuration as TOML, preceded by a version line.
pub fn render(config: &CliConfig) -> Result<String> {
    Ok(format!(
        "# pricer {}\n{}",
        env!("CARGO_PKG_VERSION"),
        config.to_toml()?
    ))
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", render(config)?);
    Ok(())
}
