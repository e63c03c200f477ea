use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};
use tracing::warn;

use crate::models::PermissionState;
use crate::overlay::PickerHost;
use crate::Result;

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "app.tauri.cameracapture";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_camera_capture);

// initializes the Kotlin or Swift picker classes
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> Result<MobilePicker<R>> {
    #[cfg(target_os = "android")]
    let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "CameraCapturePlugin")?;
    #[cfg(target_os = "ios")]
    let handle = api.register_ios_plugin(init_plugin_camera_capture)?;
    Ok(MobilePicker(handle))
}

/// Picker backed by the platform camera UI.
pub struct MobilePicker<R: Runtime>(PluginHandle<R>);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveFrameArgs<'a> {
    destination: &'a Path,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveFrameResponse {
    path: PathBuf,
}

impl<R: Runtime> PickerHost for MobilePicker<R> {
    fn check_permission(&self) -> Result<PermissionState> {
        self.0
            .run_mobile_plugin("checkPermission", ())
            .map_err(Into::into)
    }

    fn request_permission(&self) -> Result<PermissionState> {
        self.0
            .run_mobile_plugin("requestPermission", ())
            .map_err(Into::into)
    }

    fn present(&self) -> Result<()> {
        self.0
            .run_mobile_plugin("presentPicker", ())
            .map_err(Into::into)
    }

    fn save_frame(&self, destination: &Path) -> Result<PathBuf> {
        let response: SaveFrameResponse = self
            .0
            .run_mobile_plugin("saveFrame", SaveFrameArgs { destination })?;
        Ok(response.path)
    }

    fn dismiss(&self) {
        if let Err(e) = self.0.run_mobile_plugin::<()>("dismissPicker", ()) {
            warn!("failed to dismiss native picker: {}", e);
        }
    }
}
