use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_request_close: Callback<()>,
    #[prop_or_default]
    pub content_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Closing is always requested through `on_request_close`;
/// the parent owns the open state.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let is_open = props.is_open;
        let on_request_close = props.on_request_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_request_close.emit(());
            }
        });
    }

    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_request_close = props.on_request_close.clone();
        Callback::from(move |_: MouseEvent| on_request_close.emit(()))
    };

    // clicks inside the dialog must not reach the overlay
    let on_content_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-label={props.content_label.clone()}
                onclick={on_content_click}
            >
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background-color: rgba(0, 0, 0, 0.5);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                }
                .modal-content {
                    width: 90%;
                    max-width: 500px;
                    margin: auto;
                    padding: 40px;
                    background-color: #f1e1d0;
                    border-radius: 15px;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
                    text-align: center;
                    color: #333;
                    font-family: 'Dancing Script', cursive;
                    animation: letterReveal 2s ease-in-out;
                }
                @keyframes letterReveal {
                    0% { opacity: 0; transform: translateY(30px); }
                    100% { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .modal-content { padding: 30px; }
                }
                @media (max-width: 480px) {
                    .modal-content { width: 95%; padding: 20px; }
                }
                "#}
            </style>
        </div>
    }
}
