use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::NodeRef;

/// Owned handle to the card's `<audio>` element.
#[derive(Default)]
pub struct AudioHandle {
    node: NodeRef,
}

impl AudioHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_ref(&self) -> NodeRef {
        self.node.clone()
    }

    /// Starts playback. Autoplay blocks and unsupported formats are logged,
    /// never propagated.
    pub fn play(&self) {
        let audio = match self.node.cast::<HtmlAudioElement>() {
            Some(audio) => audio,
            None => {
                warn!("Audio element is not mounted, skipping playback");
                return;
            }
        };

        match audio.play() {
            Ok(promise) => {
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => debug!("Background audio playing"),
                        Err(e) => warn!("Background audio was rejected: {:?}", e),
                    }
                });
            }
            Err(e) => warn!("Could not start background audio: {:?}", e),
        }
    }
}
