//! Chart-ready payload generation.
//!
//! Turns the pipeline's views into the plain JSON documents the external
//! rendering collaborators consume: a heatmap payload for the cross-tab
//! and a lines payload for the time series. No rendering happens here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub mod heatmap;
pub mod lines;

pub use heatmap::{HeatmapPayload, ValueRange};
pub use lines::{LinesPayload, LineSeries};

/// Write one payload as pretty-printed JSON, creating parent directories as
/// needed.
pub fn write_json<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut text = serde_json::to_string_pretty(payload).context("serialize payload")?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
