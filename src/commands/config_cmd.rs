use crate::core::{config::Config, error::Result};

/// Print the effective configuration as JSON
pub fn execute_config(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
