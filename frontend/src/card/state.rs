//! Interaction state of the card, kept free of any browser types so every
//! transition can be exercised without a DOM.
//!
//! User actions and camera outcomes go in, a list of [`Effect`]s comes out.
//! The page component performs the effects; nothing here touches the host.

use log::debug;

use crate::errors::MediaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    #[default]
    Unset,
    Affirmative,
    Negative,
}

/// Identity of one camera request. A resolution carrying any other id than
/// the pending one is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaPermission {
    #[default]
    Idle,
    Pending(RequestId),
    Granted,
    Denied(MediaError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlayAudio,
    RequestCamera(RequestId),
    ReleaseStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Accepted,
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CardState {
    response: Response,
    modal_open: bool,
    permission: MediaPermission,
    issued: u64,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> Response {
        self.response
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn permission(&self) -> &MediaPermission {
        &self.permission
    }

    pub fn shows_negative_message(&self) -> bool {
        self.response == Response::Negative
    }

    /// Opens the modal and starts the music. A camera request goes out only
    /// when the modal was closed and nothing is pending or granted already.
    pub fn choose_affirmative(&mut self) -> Vec<Effect> {
        let was_open = self.modal_open;
        self.response = Response::Affirmative;
        self.modal_open = true;

        let mut effects = vec![Effect::PlayAudio];
        let busy = matches!(self.permission, MediaPermission::Pending(_) | MediaPermission::Granted);
        if !was_open && !busy {
            self.issued += 1;
            let id = RequestId(self.issued);
            self.permission = MediaPermission::Pending(id);
            effects.push(Effect::RequestCamera(id));
        }
        debug!("Affirmative choice -> {:?}", effects);
        effects
    }

    pub fn choose_negative(&mut self) {
        self.response = Response::Negative;
        debug!("Negative choice");
    }

    /// Closes the modal. A granted stream is released before anything else
    /// changes; a pending request is orphaned and its result discarded later.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        if !self.modal_open {
            return Vec::new();
        }
        let effects = self.drop_permission();
        self.modal_open = false;
        debug!("Modal dismissed -> {:?}", effects);
        effects
    }

    /// The view is going away; whatever is held must be let go.
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.drop_permission()
    }

    pub fn resolve_camera(&mut self, id: RequestId, outcome: Result<(), MediaError>) -> Resolution {
        if self.permission != MediaPermission::Pending(id) {
            debug!("Ignoring stale camera result for {:?}", id);
            return Resolution::Stale;
        }
        self.permission = match outcome {
            Ok(()) => MediaPermission::Granted,
            Err(e) => MediaPermission::Denied(e),
        };
        Resolution::Accepted
    }

    fn drop_permission(&mut self) -> Vec<Effect> {
        let previous = std::mem::take(&mut self.permission);
        match previous {
            MediaPermission::Granted => vec![Effect::ReleaseStream],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requested(effects: &[Effect]) -> Vec<RequestId> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::RequestCamera(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn initial_state_is_quiet() {
        let state = CardState::new();
        assert_eq!(state.response(), Response::Unset);
        assert!(!state.modal_open());
        assert_eq!(state.permission(), &MediaPermission::Idle);
        assert!(!state.shows_negative_message());
    }

    #[test]
    fn negative_shows_message_without_side_effects() {
        let mut state = CardState::new();
        state.choose_negative();

        assert_eq!(state.response(), Response::Negative);
        assert!(state.shows_negative_message());
        assert!(!state.modal_open());
        assert_eq!(state.permission(), &MediaPermission::Idle);
    }

    #[test]
    fn latest_click_wins() {
        let mut state = CardState::new();
        state.choose_negative();
        state.choose_affirmative();
        assert_eq!(state.response(), Response::Affirmative);
        assert!(!state.shows_negative_message());

        state.choose_negative();
        assert_eq!(state.response(), Response::Negative);
        // the open modal is not closed by a later "no"
        assert!(state.modal_open());
    }

    #[test]
    fn affirmative_plays_audio_and_requests_camera_once() {
        let mut state = CardState::new();
        let effects = state.choose_affirmative();

        assert!(state.modal_open());
        assert_eq!(effects[0], Effect::PlayAudio);
        let ids = requested(&effects);
        assert_eq!(ids.len(), 1);
        assert_eq!(state.permission(), &MediaPermission::Pending(ids[0]));
    }

    #[test]
    fn repeated_affirmative_does_not_stack_requests() {
        let mut state = CardState::new();
        let first = state.choose_affirmative();
        let id = requested(&first)[0];

        let second = state.choose_affirmative();
        assert_eq!(second, vec![Effect::PlayAudio]);

        assert_eq!(state.resolve_camera(id, Ok(())), Resolution::Accepted);
        let third = state.choose_affirmative();
        assert_eq!(third, vec![Effect::PlayAudio]);
        assert_eq!(state.permission(), &MediaPermission::Granted);
    }

    #[test]
    fn granted_camera_is_recorded() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];

        assert_eq!(state.resolve_camera(id, Ok(())), Resolution::Accepted);
        assert_eq!(state.permission(), &MediaPermission::Granted);
        assert!(state.modal_open());
    }

    #[test]
    fn denied_camera_keeps_modal_open() {
        let mut state = CardState::new();
        let effects = state.choose_affirmative();
        let id = requested(&effects)[0];

        let outcome = state.resolve_camera(id, Err(MediaError::PermissionDenied));
        assert_eq!(outcome, Resolution::Accepted);
        assert_eq!(state.permission(), &MediaPermission::Denied(MediaError::PermissionDenied));
        assert!(state.modal_open());
        // audio went out regardless of the camera
        assert!(effects.contains(&Effect::PlayAudio));
    }

    #[test]
    fn dismiss_releases_granted_stream_and_reopen_requests_again() {
        let mut state = CardState::new();
        let first = requested(&state.choose_affirmative())[0];
        state.resolve_camera(first, Ok(()));

        let effects = state.dismiss();
        assert_eq!(effects, vec![Effect::ReleaseStream]);
        assert!(!state.modal_open());
        assert_eq!(state.permission(), &MediaPermission::Idle);
        assert_eq!(state.response(), Response::Affirmative);

        let again = requested(&state.choose_affirmative());
        assert_eq!(again.len(), 1);
        assert_ne!(again[0], first);
    }

    #[test]
    fn dismiss_twice_is_harmless() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];
        state.resolve_camera(id, Ok(()));

        assert_eq!(state.dismiss(), vec![Effect::ReleaseStream]);
        assert!(state.dismiss().is_empty());
        assert!(state.teardown().is_empty());
    }

    #[test]
    fn dismiss_after_denial_has_nothing_to_release() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];
        state.resolve_camera(id, Err(MediaError::NoDevice));

        assert!(state.dismiss().is_empty());
        assert_eq!(state.permission(), &MediaPermission::Idle);
    }

    #[test]
    fn late_result_after_dismiss_is_stale() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];
        assert!(state.dismiss().is_empty());

        assert_eq!(state.resolve_camera(id, Ok(())), Resolution::Stale);
        assert_eq!(state.permission(), &MediaPermission::Idle);
    }

    #[test]
    fn old_request_cannot_settle_a_newer_one() {
        let mut state = CardState::new();
        let old = requested(&state.choose_affirmative())[0];
        state.dismiss();
        let new = requested(&state.choose_affirmative())[0];

        assert_eq!(state.resolve_camera(old, Ok(())), Resolution::Stale);
        assert_eq!(state.permission(), &MediaPermission::Pending(new));

        assert_eq!(state.resolve_camera(new, Err(MediaError::PermissionDenied)), Resolution::Accepted);
        assert_eq!(state.permission(), &MediaPermission::Denied(MediaError::PermissionDenied));
    }

    #[test]
    fn teardown_orphans_pending_request() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];

        assert!(state.teardown().is_empty());
        assert_eq!(state.resolve_camera(id, Ok(())), Resolution::Stale);
    }

    #[test]
    fn teardown_releases_granted_stream() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];
        state.resolve_camera(id, Ok(()));

        assert_eq!(state.teardown(), vec![Effect::ReleaseStream]);
    }

    #[test]
    fn affirmative_while_open_and_denied_does_not_retry() {
        let mut state = CardState::new();
        let id = requested(&state.choose_affirmative())[0];
        state.resolve_camera(id, Err(MediaError::PermissionDenied));

        assert_eq!(state.choose_affirmative(), vec![Effect::PlayAudio]);
    }
}
