use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::dropzone::Dropzone;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub username: String,
    pub password: String,
    /// Whether a dropped file is waiting to be loaded; gates the load
    /// button.
    pub staged: bool,
    pub on_username: Callback<String>,
    pub on_password: Callback<String>,
    pub on_staged: Callback<String>,
    pub on_load: Callback<()>,
    pub on_change_password: Callback<()>,
}

fn input_callback(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        cb.emit(input.value());
    })
}

/// Admin-only controls: the dropzone, the credential inputs, and the two
/// guarded actions. Only rendered while admin mode is on.
#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let on_load = {
        let on_load = props.on_load.clone();
        Callback::from(move |_| on_load.emit(()))
    };
    let on_change_password = {
        let on_change_password = props.on_change_password.clone();
        Callback::from(move |_| on_change_password.emit(()))
    };

    html! {
        <div class="admin-panel">
            <Dropzone on_staged={props.on_staged.clone()} />
            <div class="password-section">
                <input
                    type="text"
                    placeholder="Admin username"
                    value={props.username.clone()}
                    oninput={input_callback(&props.on_username)}
                />
                <input
                    type="password"
                    placeholder="Admin password"
                    value={props.password.clone()}
                    oninput={input_callback(&props.on_password)}
                />
                <button onclick={on_load} disabled={!props.staged}>
                    { "Load Events" }
                </button>
                <button onclick={on_change_password}>
                    { "Change Password" }
                </button>
            </div>
        </div>
    }
}
