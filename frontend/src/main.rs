mod components;
mod services;
mod state;

use shared::models::CalendarEvent;
use yew::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::calendar::Calendar;
use crate::components::header::Header;
use crate::components::prompt::Prompt;
use crate::services::{credentials, storage};
use crate::state::{CalendarState, Msg};

#[function_component(App)]
fn app() -> Html {
    // Seed from local storage; everything else starts from the defaults.
    let state = use_reducer(|| CalendarState::with_events(storage::load_events()));

    // One-shot credential fetch. A failure only disables admin
    // authentication for this session.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = credentials::fetch_admin_credentials().await;
                state.dispatch(Msg::CredentialsFetched(result));
            });
            || ()
        });
    }

    // Mirror the event list to local storage after every accepted
    // mutation (create, edit, bulk-load).
    use_effect_with(state.events.clone(), |events: &Vec<CalendarEvent>| {
        storage::save_events(events);
        || ()
    });

    let on_toggle_admin = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(Msg::ToggleAdmin))
    };
    let on_select_slot = {
        let state = state.clone();
        Callback::from(move |(start, end)| state.dispatch(Msg::SlotSelected { start, end }))
    };
    let on_select_event = {
        let state = state.clone();
        Callback::from(move |event: CalendarEvent| state.dispatch(Msg::EventSelected(event.id)))
    };
    let on_staged = {
        let state = state.clone();
        Callback::from(move |content| state.dispatch(Msg::FileStaged(content)))
    };
    let on_username = {
        let state = state.clone();
        Callback::from(move |value| state.dispatch(Msg::UsernameInput(value)))
    };
    let on_password = {
        let state = state.clone();
        Callback::from(move |value| state.dispatch(Msg::PasswordInput(value)))
    };
    let on_load = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Msg::LoadEvents))
    };
    let on_change_password = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Msg::ChangePassword))
    };
    let on_prompt_submit = {
        let state = state.clone();
        Callback::from(move |value| state.dispatch(Msg::PromptSubmitted(value)))
    };
    let on_prompt_cancel = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Msg::PromptCancelled))
    };
    let on_dismiss_notice = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Msg::DismissNotice))
    };

    html! {
        <div id="app">
            <Header />
            if let Some(notice) = &state.notice {
                <div class={if notice.is_error() { "notice notice-error" } else { "notice notice-info" }}>
                    <span>{ notice.text() }</span>
                    <button onclick={on_dismiss_notice}>{ "Dismiss" }</button>
                </div>
            }
            if state.is_admin {
                <AdminPanel
                    username={state.username_input.clone()}
                    password={state.password_input.clone()}
                    staged={state.staged.is_some()}
                    on_username={on_username}
                    on_password={on_password}
                    on_staged={on_staged}
                    on_load={on_load}
                    on_change_password={on_change_password}
                />
            }
            <div class="calendar-container">
                <Calendar
                    events={state.events.clone()}
                    selectable={state.is_admin}
                    on_select_slot={on_select_slot}
                    on_select_event={on_select_event}
                />
            </div>
            <div class="admin-toggle">
                <label>
                    <input
                        type="checkbox"
                        checked={state.is_admin}
                        onchange={on_toggle_admin}
                    />
                    { "Admin Mode" }
                </label>
            </div>
            if let Some(prompt) = &state.prompt {
                <Prompt
                    label={prompt.label().to_string()}
                    initial={prompt.initial().to_string()}
                    input_type={prompt.input_type().to_string()}
                    on_submit={on_prompt_submit}
                    on_cancel={on_prompt_cancel}
                />
            }
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
