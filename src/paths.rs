use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::CaptureConfig;

/// Directory captured photos are written to. The config override wins;
/// otherwise the platform pictures directory, the user data directory, or the
/// temp directory, in that order.
pub fn capture_dir(config: &CaptureConfig) -> PathBuf {
    if let Some(dir) = &config.capture_dir {
        return dir.clone();
    }

    dirs::picture_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("camera-capture")
}

/// Create the capture directory if it does not exist yet.
pub fn ensure_capture_dir(config: &CaptureConfig) -> Result<PathBuf> {
    let dir = capture_dir(config);
    std::fs::create_dir_all(&dir).context("Failed to create capture directory")?;
    Ok(dir)
}

/// Destination for one captured photo. Timestamp keeps the directory sorted,
/// the uuid suffix keeps two captures within a second from colliding.
pub fn unique_capture_path(config: &CaptureConfig) -> Result<PathBuf> {
    let dir = ensure_capture_dir(config)?;
    let name = format!(
        "{}_{}_{}.jpg",
        config.file_prefix,
        Utc::now().format("%Y%m%d-%H%M%S"),
        Uuid::new_v4().simple()
    );
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_dir_honors_override() {
        let config = CaptureConfig {
            capture_dir: Some(PathBuf::from("/var/photos")),
            ..Default::default()
        };
        assert_eq!(capture_dir(&config), PathBuf::from("/var/photos"));
    }

    #[test]
    fn test_unique_capture_paths_do_not_collide() {
        let temp = tempfile::tempdir().unwrap();
        let config = CaptureConfig {
            capture_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let a = unique_capture_path(&config).unwrap();
        let b = unique_capture_path(&config).unwrap();
        assert_ne!(a, b, "two captures must never share a destination");
        assert!(a.starts_with(temp.path()));
    }

    #[test]
    fn test_capture_path_uses_configured_prefix() {
        let temp = tempfile::tempdir().unwrap();
        let config = CaptureConfig {
            capture_dir: Some(temp.path().to_path_buf()),
            file_prefix: "img".to_string(),
        };

        let path = unique_capture_path(&config).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("img_"), "unexpected file name: {}", name);
        assert!(name.ends_with(".jpg"));
    }
}
