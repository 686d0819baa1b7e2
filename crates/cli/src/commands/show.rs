//! Show command implementation.

use anyhow::Result;
use envload_config::EnvLoader;

use crate::commands::load_snapshot;
use crate::formatters::{OutputFormat, get_formatter};

pub fn run(loader: &EnvLoader, output_format: &str) -> Result<()> {
    // Validate the format before touching any file.
    let format = OutputFormat::from_str(output_format)?;
    let formatter = get_formatter(format);

    let (_, report) = load_snapshot(loader)?;

    let output = formatter.format_vars(&report.values)?;
    if output.ends_with('\n') || output.is_empty() {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}
