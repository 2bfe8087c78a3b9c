//! Output formatting and persistence for popular-times profiles.
//!
//! Supports pretty-printing to the log and writing the JSON file the app
//! reads.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::analyzers::types::PopularTimes;
use crate::error::Result;

/// Logs profiles using Rust's debug pretty-print format.
pub fn print_pretty(popular_times: &PopularTimes) {
    debug!("{:#?}", popular_times);
}

/// Logs profiles as pretty-printed JSON.
pub fn print_json(popular_times: &PopularTimes) -> Result<()> {
    info!("{}", to_json_string(popular_times)?);
    Ok(())
}

/// Renders profiles as JSON with two-space indentation.
pub fn to_json_string(popular_times: &PopularTimes) -> Result<String> {
    Ok(serde_json::to_string_pretty(popular_times)?)
}

/// Writes profiles as a JSON object keyed by lot name, replacing any
/// existing file and creating missing parent directories.
pub fn write_popular_times(path: &Path, popular_times: &PopularTimes) -> Result<()> {
    let body = to_json_string(popular_times)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(body.as_bytes())?;
    file.flush()?;

    info!(
        path = %path.display(),
        lots = popular_times.len(),
        bytes = body.len(),
        "Popular times written"
    );
    Ok(())
}
