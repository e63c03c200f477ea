//! Native camera overlay with a custom shutter button for Tauri apps.
//!
//! One inbound `open_camera` invocation presents the platform picker with the
//! host webview's chrome drawn over it, and resolves with the captured
//! photo's path once the user presses the shutter, or with a cancelled error
//! when they back out. A single cycle may be in flight at a time; re-entrant
//! opens fail immediately with a busy error.

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod config;
mod error;
mod handler;
mod models;
mod overlay;
mod paths;

pub use config::CaptureConfig;
pub use error::{Error, Result};
pub use handler::CameraHandler;
pub use overlay::{CaptureOverlay, OverlayPhase, PickerHost};

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`]
/// to access the camera capture APIs.
pub trait CameraCaptureExt<R: Runtime> {
    fn camera_capture(&self) -> &CameraHandler;
}

impl<R: Runtime, T: Manager<R>> crate::CameraCaptureExt<R> for T {
    fn camera_capture(&self) -> &CameraHandler {
        self.state::<CameraHandler>().inner()
    }
}

/// Initializes the plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<CaptureConfig>> {
    Builder::<R, Option<CaptureConfig>>::new("camera-capture")
        .invoke_handler(tauri::generate_handler![
            commands::open_camera,
            commands::trigger_shutter,
            commands::cancel_capture,
            commands::capture_state,
            commands::check_permission,
            commands::request_permission,
        ])
        .js_init_script(include_str!("../guest-js/index.js").to_string())
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            #[cfg(mobile)]
            let picker = mobile::init(app, api)?;
            #[cfg(desktop)]
            let picker = desktop::init(app, api)?;
            app.manage(CameraHandler::new(Box::new(picker), config));
            Ok(())
        })
        .on_event(|app, event| {
            if let tauri::RunEvent::Exit = event {
                if let Some(handler) = app.try_state::<CameraHandler>() {
                    handler.abort_pending();
                }
            }
        })
        .build()
}
