//! The capture overlay: a native picker presentation with one custom control,
//! modeled as an explicit state machine so the completion contract can be
//! exercised without a UI host.
//!
//! The overlay reports its outcome exactly once, through a oneshot sender it
//! receives at construction time. The handler that created it owns it for the
//! whole cycle; the overlay never reaches back into handler state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::oneshot;
use tracing::{error, warn};

use crate::models::{CaptureOutcome, CapturedPhoto, PermissionState};
use crate::{Error, Result};

/// Capability surface of the platform picker component. The overlay drives
/// the native UI exclusively through this trait; platform modules implement
/// it over the real picker, tests over a fake.
///
/// `dismiss` must be idempotent: cancellation paths reach it after the native
/// UI may already be gone.
pub trait PickerHost: Send + Sync {
    fn check_permission(&self) -> Result<PermissionState>;
    fn request_permission(&self) -> Result<PermissionState>;

    /// Bring the live picker UI on screen.
    fn present(&self) -> Result<()>;

    /// Capture the current frame and persist it at `destination`, returning
    /// the path actually written.
    fn save_frame(&self, destination: &Path) -> Result<PathBuf>;

    /// Tear the picker UI down.
    fn dismiss(&self);
}

/// Lifecycle of one overlay presentation. There is no edge back to
/// `Presenting`; cancellation jumps straight to `Dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OverlayPhase {
    Idle,
    Presenting,
    Captured,
    Dismissed,
}

/// One capture cycle's worth of overlay state. Created per `open` call,
/// dropped once the outcome is delivered.
pub struct CaptureOverlay {
    phase: OverlayPhase,
    reporter: Option<oneshot::Sender<CaptureOutcome>>,
}

impl CaptureOverlay {
    pub fn new(reporter: oneshot::Sender<CaptureOutcome>) -> Self {
        Self {
            phase: OverlayPhase::Idle,
            reporter: Some(reporter),
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn present(&mut self, host: &dyn PickerHost) -> Result<()> {
        if self.phase != OverlayPhase::Idle {
            warn!("present called twice on the same overlay");
            return Err(Error::Busy);
        }
        host.present()?;
        self.phase = OverlayPhase::Presenting;
        Ok(())
    }

    /// Shutter press. Captures the current frame, persists it, reports the
    /// outcome. Returns `Ok(true)` when the press produced the cycle's
    /// report, `Ok(false)` when it was swallowed as a duplicate.
    ///
    /// The platform delegate is not assumed to serialize presses: a second
    /// press landing after the capture but before dismissal completes must
    /// not produce a second report.
    pub fn shutter_pressed(
        &mut self,
        host: &dyn PickerHost,
        destination: &Path,
    ) -> Result<bool> {
        match self.phase {
            OverlayPhase::Presenting => {}
            OverlayPhase::Captured | OverlayPhase::Dismissed => {
                warn!("ignoring duplicate shutter press in {:?} phase", self.phase);
                return Ok(false);
            }
            OverlayPhase::Idle => return Err(Error::NoPendingCapture),
        }

        // A failed save keeps the overlay presenting; the user can press
        // again or back out, so the cycle still ends with exactly one report.
        let path = host.save_frame(destination)?;
        self.phase = OverlayPhase::Captured;
        self.report(CaptureOutcome::Captured {
            photo: CapturedPhoto { path },
        });
        Ok(true)
    }

    /// Handler acknowledgment of a delivered capture: tear the UI down.
    pub fn acknowledge(&mut self, host: &dyn PickerHost) {
        host.dismiss();
        self.phase = OverlayPhase::Dismissed;
    }

    /// The picker was abandoned without a capture. Reports a cancelled
    /// outcome when the cycle is still open, so the gate always clears.
    /// Returns whether this call produced the report.
    pub fn cancelled(&mut self, host: &dyn PickerHost) -> bool {
        let reported = match self.phase {
            OverlayPhase::Presenting => {
                self.report(CaptureOutcome::Cancelled);
                true
            }
            phase => {
                warn!("ignoring cancellation in {:?} phase", phase);
                false
            }
        };
        host.dismiss();
        self.phase = OverlayPhase::Dismissed;
        reported
    }

    fn report(&mut self, outcome: CaptureOutcome) {
        match self.reporter.take() {
            Some(reporter) => {
                if reporter.send(outcome).is_err() {
                    warn!("capture outcome receiver dropped before delivery");
                }
            }
            // Unreachable through the phase checks above.
            None => error!("overlay attempted to report a second outcome"),
        }
    }
}

impl Drop for CaptureOverlay {
    fn drop(&mut self) {
        // An overlay discarded mid-presentation would strand the pending
        // invocation; deliver a cancellation and make it loud.
        if self.phase == OverlayPhase::Presenting {
            error!("capture overlay dropped while presenting");
            self.report(CaptureOutcome::Cancelled);
        }
    }
}
