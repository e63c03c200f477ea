use serde::Deserialize;
use std::path::PathBuf;

/// Plugin configuration, read from the `camera-capture` section of the host
/// app's `tauri.conf.json`. Every field has a default so the section may be
/// omitted entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// Directory captured photos are written to. Falls back to a
    /// platform-specific pictures directory.
    pub capture_dir: Option<PathBuf>,

    /// File name prefix for captured photos.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_dir: None,
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_file_prefix() -> String {
    "photo".to_string()
}
