use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::errors::MediaError;

/// Anything holding live device tracks that can be stopped.
pub trait TrackSource {
    fn stop_tracks(&self);
}

impl TrackSource for MediaStream {
    fn stop_tracks(&self) {
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// Exclusive owner of an acquired camera stream. Tracks are stopped on
/// `release()` or, failing that, when the owner is dropped.
pub struct CameraStream<S: TrackSource = MediaStream> {
    source: Option<S>,
}

impl<S: TrackSource> CameraStream<S> {
    pub fn new(source: S) -> Self {
        Self { source: Some(source) }
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Stops every track. Safe to call any number of times.
    pub fn release(&mut self) {
        if let Some(source) = self.source.take() {
            source.stop_tracks();
            debug!("Camera stream released");
        }
    }
}

impl<S: TrackSource> Drop for CameraStream<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Asks the browser for a video-only stream. Resolves once the permission
/// prompt is answered; both a synchronous throw and a rejected promise come
/// back as `MediaError`.
pub async fn request_camera() -> Result<CameraStream, MediaError> {
    let window = web_sys::window().ok_or(MediaError::Unsupported)?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    info!("Waiting for camera permission");
    let stream = JsFuture::from(promise).await?;

    let stream = stream
        .dyn_into::<MediaStream>()
        .map_err(|_| MediaError::Other("getUserMedia did not return a MediaStream".to_string()))?;
    Ok(CameraStream::new(stream))
}
