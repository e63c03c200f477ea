use serde::{ser::Serializer, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A capture cycle is already in flight; the new invocation is discarded.
    #[error("a camera capture is already in progress")]
    Busy,

    /// The picker was dismissed before a photo was taken.
    #[error("camera capture was cancelled")]
    Cancelled,

    /// A completion event arrived with no capture cycle in flight. This is a
    /// contract breach by the caller, not a user-facing condition.
    #[error("no camera capture is in progress")]
    NoPendingCapture,

    #[error("camera permission was denied")]
    PermissionDenied,

    #[error("camera capture is not supported on this platform")]
    Unsupported,

    /// The overlay was torn down without delivering an outcome.
    #[error("capture cycle ended without reporting a result")]
    ResultAbandoned,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),

    #[cfg(mobile)]
    #[error(transparent)]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
