use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PromptProps {
    pub label: String,
    #[prop_or_default]
    pub initial: String,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub on_submit: Callback<String>,
    pub on_cancel: Callback<()>,
}

/// Modal input request, the non-blocking replacement for `window.prompt`.
/// Cancel (or submitting nothing) abandons whatever action asked for the
/// input.
#[function_component(Prompt)]
pub fn prompt(props: &PromptProps) -> Html {
    let value = use_state(|| props.initial.clone());

    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    let on_ok = {
        let value = value.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit((*value).clone()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <label class="modal-label">{ &props.label }</label>
                <input
                    type={props.input_type.clone()}
                    value={(*value).clone()}
                    {oninput}
                />
                <div class="modal-actions">
                    <button onclick={on_ok}>{ "OK" }</button>
                    <button onclick={on_cancel}>{ "Cancel" }</button>
                </div>
            </div>
        </div>
    }
}
