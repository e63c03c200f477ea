//! Single-flight gate in front of the capture overlay.
//!
//! One `open` cycle may be in flight at a time. The pending invocation and
//! the busy flag collapse into one slot: `Some` means a cycle is running and
//! holds the overlay whose reporter will resolve it. Completion events with
//! an empty slot are contract breaches and are rejected loudly.

use tokio::sync::{oneshot, Mutex};
use tracing::{error, info};

use crate::config::CaptureConfig;
use crate::models::{CaptureOutcome, CapturedPhoto, PermissionState};
use crate::overlay::{CaptureOverlay, OverlayPhase, PickerHost};
use crate::paths;
use crate::{Error, Result};

pub struct CameraHandler {
    host: Box<dyn PickerHost>,
    config: CaptureConfig,
    active: Mutex<Option<CaptureOverlay>>,
}

impl CameraHandler {
    pub fn new(host: Box<dyn PickerHost>, config: CaptureConfig) -> Self {
        Self {
            host,
            config,
            active: Mutex::new(None),
        }
    }

    /// Whether a capture cycle is currently in flight.
    pub async fn is_pending(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// Phase of the active overlay; `Idle` when no cycle is in flight.
    pub async fn phase(&self) -> OverlayPhase {
        self.active
            .lock()
            .await
            .as_ref()
            .map(|overlay| overlay.phase())
            .unwrap_or(OverlayPhase::Idle)
    }

    /// Begin a capture cycle and wait for its outcome.
    ///
    /// Fails immediately with [`Error::Busy`] while another cycle is in
    /// flight; the in-flight cycle is left untouched. When presenting the
    /// picker fails, nothing is stored and the gate stays clear.
    pub async fn open(&self) -> Result<CapturedPhoto> {
        let receiver = {
            let mut active = self.active.lock().await;
            if active.is_some() {
                return Err(Error::Busy);
            }

            let (reporter, receiver) = oneshot::channel();
            let mut overlay = CaptureOverlay::new(reporter);
            overlay.present(self.host.as_ref())?;
            *active = Some(overlay);
            receiver
        };
        info!("camera overlay presented");

        match receiver.await {
            Ok(CaptureOutcome::Captured { photo }) => {
                info!("captured photo at {}", photo.path.display());
                Ok(photo)
            }
            Ok(CaptureOutcome::Cancelled) => Err(Error::Cancelled),
            Err(_) => {
                // The drop guard on the overlay makes this unreachable short
                // of a bug in this module.
                error!("capture cycle ended without delivering an outcome");
                Err(Error::ResultAbandoned)
            }
        }
    }

    /// Shutter press from the overlay chrome. Persists the current frame and
    /// resolves the pending invocation with its path.
    pub async fn shutter_pressed(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        let overlay = match active.as_mut() {
            Some(overlay) => overlay,
            None => {
                error!("shutter press with no capture cycle in flight");
                return Err(Error::NoPendingCapture);
            }
        };

        let destination = paths::unique_capture_path(&self.config)?;
        if overlay.shutter_pressed(self.host.as_ref(), &destination)? {
            if let Some(mut overlay) = active.take() {
                overlay.acknowledge(self.host.as_ref());
            }
        }
        Ok(())
    }

    /// The picker was dismissed without a capture. Resolves the pending
    /// invocation with a cancelled outcome and clears the gate.
    pub async fn cancel(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        match active.take() {
            Some(mut overlay) => {
                overlay.cancelled(self.host.as_ref());
                Ok(())
            }
            None => {
                error!("cancellation with no capture cycle in flight");
                Err(Error::NoPendingCapture)
            }
        }
    }

    /// Best-effort teardown on app shutdown: resolve any in-flight cycle as
    /// cancelled so the pending invocation is not stranded.
    pub fn abort_pending(&self) {
        if let Ok(mut active) = self.active.try_lock() {
            if let Some(mut overlay) = active.take() {
                overlay.cancelled(self.host.as_ref());
            }
        }
    }

    pub fn check_permission(&self) -> Result<PermissionState> {
        self.host.check_permission()
    }

    pub fn request_permission(&self) -> Result<PermissionState> {
        self.host.request_permission()
    }
}
