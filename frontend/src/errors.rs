use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Why the camera could not be acquired. Every variant is recovered the same
/// way: the modal shows the denial message instead of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("camera permission was refused")]
    PermissionDenied,
    #[error("no usable camera was found")]
    NoDevice,
    #[error("camera access is not supported in this browser")]
    Unsupported,
    #[error("camera request failed: {0}")]
    Other(String),
}

impl MediaError {
    /// Maps a DOM exception name (as thrown by getUserMedia) to an error.
    pub fn from_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => MediaError::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" | "OverconstrainedError" | "NotReadableError"
            | "TrackStartError" => MediaError::NoDevice,
            // insecure origins and missing navigator.mediaDevices both end up here
            "TypeError" | "NotSupportedError" => MediaError::Unsupported,
            _ if message.is_empty() => MediaError::Other(name.to_string()),
            _ => MediaError::Other(format!("{}: {}", name, message)),
        }
    }
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
            return MediaError::from_exception(&exception.name(), &exception.message());
        }
        if let Some(error) = value.dyn_ref::<web_sys::js_sys::Error>() {
            let name: String = error.name().into();
            let message: String = error.message().into();
            return MediaError::from_exception(&name, &message);
        }
        match value.as_string() {
            Some(text) => MediaError::Other(text),
            None => MediaError::Other(format!("{:?}", value)),
        }
    }
}
