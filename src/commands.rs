use tauri::{command, AppHandle, Runtime};
use tracing::info;

use crate::models::{CapturedPhoto, PermissionState};
use crate::overlay::OverlayPhase;
use crate::CameraCaptureExt;
use crate::Result;

/// Present the capture overlay and wait for the user to take a photo.
/// Resolves with the saved file's path; fails with a busy error while a
/// cycle is already in flight, or a cancelled error when the user backs out.
#[command]
pub async fn open_camera<R: Runtime>(app: AppHandle<R>) -> Result<CapturedPhoto> {
    info!("Opening camera overlay");
    app.camera_capture().open().await
}

/// Custom shutter button pressed in the overlay chrome.
#[command]
pub async fn trigger_shutter<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    info!("Shutter pressed");
    app.camera_capture().shutter_pressed().await
}

/// The picker was abandoned without taking a photo.
#[command]
pub async fn cancel_capture<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    info!("Capture cancelled");
    app.camera_capture().cancel().await
}

/// Current overlay phase, for the webview chrome.
#[command]
pub async fn capture_state<R: Runtime>(app: AppHandle<R>) -> Result<OverlayPhase> {
    Ok(app.camera_capture().phase().await)
}

#[command]
pub async fn check_permission<R: Runtime>(app: AppHandle<R>) -> Result<PermissionState> {
    app.camera_capture().check_permission()
}

#[command]
pub async fn request_permission<R: Runtime>(app: AppHandle<R>) -> Result<PermissionState> {
    info!("Requesting camera permission");
    app.camera_capture().request_permission()
}
