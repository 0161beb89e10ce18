//! Engine tuning loaded from `settings.toml`.
//!
//! Both values have sensible defaults, so a missing or broken file never
//! stops the game from starting.

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::association::DEFAULT_BUCKETS;
use crate::verdict::SUSTAIN_THRESHOLD;

/// Tunable parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of buckets in the clue association table.
    pub bucket_count: usize,
    /// Matching clues required to sustain an accusation. The stock rule is 2;
    /// raising or lowering it changes how strict the game is.
    pub sustain_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            sustain_threshold: SUSTAIN_THRESHOLD,
        }
    }
}

/// Loads settings from a TOML file, falling back to defaults on error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read, parsed or holds invalid values
pub fn load_settings(toml_path: &Path) -> Settings {
    match try_load_settings(toml_path) {
        Ok(settings) => {
            info!(
                "settings loaded from '{}' ({} buckets, threshold {})",
                toml_path.display(),
                settings.bucket_count,
                settings.sustain_threshold
            );
            settings
        },
        Err(e) => {
            warn!(
                "Could not load settings from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            Settings::default()
        },
    }
}

/// Attempts to load settings from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if a value is zero.
pub fn try_load_settings(toml_path: &Path) -> Result<Settings> {
    let text =
        fs::read_to_string(toml_path).with_context(|| format!("reading settings from '{}'", toml_path.display()))?;
    parse_settings(&text).with_context(|| format!("parsing settings from '{}'", toml_path.display()))
}

fn parse_settings(text: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(text)?;
    if settings.bucket_count == 0 {
        bail!("bucket_count must be at least 1");
    }
    if settings.sustain_threshold == 0 {
        bail!("sustain_threshold must be at least 1");
    }
    Ok(settings)
}
