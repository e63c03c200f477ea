use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::models::PermissionState;
use crate::overlay::PickerHost;
use crate::{Error, Result};

pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> Result<DesktopPicker> {
    Ok(DesktopPicker)
}

/// Desktop stand-in for the native picker. There is no camera overlay to
/// bridge to here, so presentation is unsupported and permissions read as
/// denied.
pub struct DesktopPicker;

impl PickerHost for DesktopPicker {
    fn check_permission(&self) -> Result<PermissionState> {
        Ok(PermissionState::Denied)
    }

    fn request_permission(&self) -> Result<PermissionState> {
        Ok(PermissionState::Denied)
    }

    fn present(&self) -> Result<()> {
        Err(Error::Unsupported)
    }

    fn save_frame(&self, _destination: &Path) -> Result<PathBuf> {
        Err(Error::Unsupported)
    }

    fn dismiss(&self) {}
}
