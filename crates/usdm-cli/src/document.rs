//! Reading and writing USDM JSON documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use usdm_model::Wrapper;

/// Render a wrapper as JSON, pretty-printed unless `compact`.
pub fn to_json(wrapper: &Wrapper, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(wrapper)
    } else {
        serde_json::to_string_pretty(wrapper)
    };
    json.context("serialize USDM document")
}

/// Write `wrapper` to `path`, or to stdout when no path is given.
pub fn write_wrapper(wrapper: &Wrapper, path: Option<&Path>, compact: bool) -> Result<()> {
    let json = to_json(wrapper, compact)?;
    match path {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote USDM document");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn read_wrapper(path: &Path) -> Result<Wrapper> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse USDM document {}", path.display()))
}
