//! Config command
//!
//! Reports build metadata for deployment scripts.

use anyhow::{Result, bail};

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which values to print
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigQuery {
    pub all: bool,
    pub project_name: bool,
    pub project_version: bool,
}

/// Lines to print for a query
///
/// `all` prints `key=value` pairs; single keys print the bare value.
///
/// # Errors
/// Returns an error if no key was selected.
pub fn config_values(query: ConfigQuery) -> Result<Vec<String>> {
    if query.all {
        return Ok(vec![
            format!("project_name={PROJECT_NAME}"),
            format!("project_version={PROJECT_VERSION}"),
        ]);
    }

    let mut lines = Vec::new();
    if query.project_name {
        lines.push(PROJECT_NAME.to_string());
    }
    if query.project_version {
        lines.push(PROJECT_VERSION.to_string());
    }

    if lines.is_empty() {
        bail!("No config key specified. Use --help to see available options.");
    }
    Ok(lines)
}
