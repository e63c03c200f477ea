use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Success payload of an `open_camera` invocation. The caller owns the file
/// once it receives the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPhoto {
    pub path: PathBuf,
}

/// Terminal result of one capture cycle, reported by the overlay exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CaptureOutcome {
    Captured { photo: CapturedPhoto },
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_outcome_wire_shape() {
        let outcome = CaptureOutcome::Captured {
            photo: CapturedPhoto {
                path: PathBuf::from("/tmp/img1.jpg"),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "Captured");
        assert_eq!(json["photo"]["path"], "/tmp/img1.jpg");

        let json = serde_json::to_value(CaptureOutcome::Cancelled).unwrap();
        assert_eq!(json["type"], "Cancelled");
    }

    #[test]
    fn test_permission_state_wire_shape() {
        assert_eq!(
            serde_json::to_string(&PermissionState::Granted).unwrap(),
            "\"granted\""
        );
        let state: PermissionState = serde_json::from_str("\"prompt\"").unwrap();
        assert_eq!(state, PermissionState::Prompt);
    }
}
