use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod errors;
mod card {
    pub mod state;
}
mod media {
    pub mod audio;
    pub mod camera;
}
mod components {
    pub mod modal;
}
mod pages {
    pub mod card;
}

use config::CardConfig;
use pages::card::Card;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Card,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, config: Rc<CardConfig>) -> Html {
    match route {
        Route::Card => {
            info!("Rendering card");
            html! { <Card config={config} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Card} /> },
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| config::load(), ());

    {
        let title = config.title.clone();
        use_effect_with_deps(move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
            || ()
        }, ());
    }

    let render = {
        let config = config.clone();
        Callback::from(move |route: Route| switch(route, config.clone()))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting card");
    yew::Renderer::<App>::new().render();
}
