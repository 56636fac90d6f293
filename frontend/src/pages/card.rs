use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::card::state::{CardState, Effect, MediaPermission, RequestId, Resolution};
use crate::components::modal::Modal;
use crate::config::CardConfig;
use crate::errors::MediaError;
use crate::media::audio::AudioHandle;
use crate::media::camera::{self, CameraStream, TrackSource};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub config: Rc<CardConfig>,
}

pub enum CardMsg {
    Affirmative,
    Negative,
    Dismiss,
    CameraResolved(RequestId, Result<CameraStream, MediaError>),
}

pub struct Card {
    state: CardState,
    audio: AudioHandle,
    video_ref: NodeRef,
    stream: Option<CameraStream>,
    preview_attached: bool,
}

impl Component for Card {
    type Message = CardMsg;
    type Properties = CardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: CardState::new(),
            audio: AudioHandle::new(),
            video_ref: NodeRef::default(),
            stream: None,
            preview_attached: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CardMsg::Affirmative => {
                info!("Yes clicked (previous answer: {:?})", self.state.response());
                let effects = self.state.choose_affirmative();
                self.apply(ctx, effects);
                true
            }
            CardMsg::Negative => {
                info!("No clicked (previous answer: {:?})", self.state.response());
                self.state.choose_negative();
                true
            }
            CardMsg::Dismiss => {
                let effects = dismiss_releasing_first(&mut self.state, &mut self.stream);
                self.preview_attached = false;
                self.apply(ctx, effects);
                true
            }
            CardMsg::CameraResolved(id, outcome) => {
                let settled = match &outcome {
                    Ok(_) => Ok(()),
                    Err(e) => Err(e.clone()),
                };
                match self.state.resolve_camera(id, settled) {
                    Resolution::Accepted => {
                        match outcome {
                            Ok(stream) => {
                                info!("Camera access granted");
                                self.stream = Some(stream);
                                self.preview_attached = false;
                            }
                            Err(e) => warn!("Camera access denied: {}", e),
                        }
                        true
                    }
                    // dropping `outcome` here stops a stream nobody is waiting for
                    Resolution::Stale => false,
                }
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.preview_attached {
            return;
        }
        let stream = match self.stream.as_ref().and_then(CameraStream::source) {
            Some(stream) => stream,
            None => return,
        };
        if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
            video.set_src_object(Some(stream));
            self.preview_attached = true;
            debug!("Camera preview attached");
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        let effects = self.state.teardown();
        self.apply(ctx, effects);
        // covers a stream whose grant raced the teardown
        self.release_stream();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let on_yes = ctx.link().callback(|_: MouseEvent| CardMsg::Affirmative);
        let on_no = ctx.link().callback(|_: MouseEvent| CardMsg::Negative);
        let on_close = ctx.link().callback(|_: ()| CardMsg::Dismiss);
        let on_dismiss = ctx.link().callback(|_: MouseEvent| CardMsg::Dismiss);

        html! {
            <div class="card-container">
                <audio ref={self.audio.node_ref()} loop=true class="card-audio">
                    <source src={config.audio_src.clone()} type="audio/mp3" />
                    {"Your browser does not support the audio element."}
                </audio>

                <div class="card-content">
                    <div class="card-letter">
                        <h2>{config.subject.clone()}</h2>
                        <p>{config.salutation.clone()}</p>
                        { for config.paragraphs.iter().map(|p| html! { <p>{p.clone()}</p> }) }
                        <p>{config.closing.clone()}</p>
                        <p>{config.signature.clone()}</p>
                    </div>

                    <div class="card-buttons">
                        <button class="card-button" onclick={on_yes}>{config.affirmative_label.clone()}</button>
                        <button class="card-button" onclick={on_no}>{config.negative_label.clone()}</button>
                    </div>
                </div>

                if self.state.shows_negative_message() {
                    <div class="card-no-response">{config.negative_message.clone()}</div>
                }

                <Modal
                    is_open={self.state.modal_open()}
                    on_request_close={on_close}
                    content_label={config.modal_label.clone()}
                >
                    <img class="card-image" src={config.image_src.clone()} alt={config.image_alt.clone()} />
                    <div class="card-message">
                        <h3>{config.modal_heading.clone()}</h3>
                        <p>{config.modal_body.clone()}</p>
                    </div>
                    { self.view_camera(config) }
                    <button class="card-button" onclick={on_dismiss}>{config.dismiss_label.clone()}</button>
                </Modal>

                <style>
                    {r#"
                    .card-container {
                        background: linear-gradient(to bottom right, #ff8a8a, #ffb3c1);
                        min-height: 100vh;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        flex-direction: column;
                        font-family: 'Dancing Script', cursive;
                        overflow: auto;
                        position: relative;
                        animation: fadeIn 2s ease-in-out;
                        padding: 0 20px;
                    }
                    @keyframes fadeIn {
                        0% { opacity: 0; }
                        100% { opacity: 1; }
                    }
                    .card-audio {
                        display: none;
                    }
                    .card-content {
                        text-align: center;
                        color: white;
                        max-width: 600px;
                        width: 100%;
                        margin-bottom: 50px;
                    }
                    .card-letter {
                        font-size: 24px;
                        color: #fff;
                        text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
                        text-align: left;
                        line-height: 1.8;
                        padding: 20px;
                        border-left: 5px solid #ff4081;
                        margin: 0 30px;
                        white-space: pre-line;
                    }
                    .card-buttons {
                        margin-top: 20px;
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .card-button {
                        background-color: #ff4081;
                        color: white;
                        border: none;
                        padding: 15px 30px;
                        font-size: 20px;
                        margin: 10px;
                        cursor: pointer;
                        border-radius: 30px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease, background-color 0.3s ease;
                    }
                    .card-button:hover {
                        background-color: #f50057;
                        transform: scale(1.1);
                    }
                    .card-button:active {
                        transform: scale(0.95);
                    }
                    .card-no-response {
                        font-size: 22px;
                        color: white;
                        margin-top: 20px;
                        text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
                        text-align: center;
                    }
                    .card-image {
                        max-width: 100%;
                        border-radius: 10px;
                        margin-bottom: 20px;
                    }
                    .card-message {
                        font-size: 22px;
                        color: #ff4081;
                        margin: 0 auto 20px auto;
                        line-height: 1.6;
                        text-align: left;
                        max-width: 400px;
                    }
                    .card-camera video {
                        width: 100%;
                        border-radius: 10px;
                        transform: scaleX(-1);
                    }
                    .card-camera-note {
                        font-size: 18px;
                        color: #555;
                    }
                    @media (max-width: 768px) {
                        .card-container { padding: 10px; }
                        .card-letter { font-size: 20px; padding: 15px; margin: 0 20px; }
                        .card-button { font-size: 18px; padding: 12px 25px; }
                        .card-no-response { font-size: 20px; }
                        .card-message { font-size: 18px; }
                    }
                    @media (max-width: 480px) {
                        .card-container { padding: 5px; }
                        .card-letter { font-size: 18px; padding: 10px; margin: 0 15px; }
                        .card-button { font-size: 16px; padding: 10px 20px; }
                        .card-no-response { font-size: 18px; }
                        .card-message { font-size: 16px; }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl Card {
    fn apply(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PlayAudio => self.audio.play(),
                Effect::RequestCamera(id) => {
                    ctx.link().send_future(async move {
                        CardMsg::CameraResolved(id, camera::request_camera().await)
                    });
                }
                Effect::ReleaseStream => self.release_stream(),
            }
        }
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
        self.preview_attached = false;
    }

    fn view_camera(&self, config: &CardConfig) -> Html {
        if let MediaPermission::Granted = self.state.permission() {
            return html! {
                <div class="card-camera">
                    <video ref={self.video_ref.clone()} autoplay=true muted=true playsinline=true />
                </div>
            };
        }
        match camera_note(self.state.permission(), config) {
            Some(note) => html! { <p class="card-camera-note">{note.to_string()}</p> },
            None => html! {},
        }
    }
}

/// Text shown in place of the preview while there is no live stream.
fn camera_note<'a>(permission: &MediaPermission, config: &'a CardConfig) -> Option<&'a str> {
    match permission {
        MediaPermission::Pending(_) => Some(&config.camera_pending_message),
        MediaPermission::Denied(_) => Some(&config.camera_denied_message),
        MediaPermission::Idle | MediaPermission::Granted => None,
    }
}

/// Stops a granted stream, then closes the modal. The returned effects no
/// longer carry the release.
fn dismiss_releasing_first<S: TrackSource>(
    state: &mut CardState,
    stream: &mut Option<CameraStream<S>>,
) -> Vec<Effect> {
    if let MediaPermission::Granted = state.permission() {
        if let Some(mut stream) = stream.take() {
            stream.release();
        }
    }
    state
        .dismiss()
        .into_iter()
        .filter(|effect| *effect != Effect::ReleaseStream)
        .collect()
}
