use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropzoneProps {
    /// Fires with the file's text once the asynchronous read completes.
    pub on_staged: Callback<String>,
}

/// Drag-and-drop target for the bulk-load file. Accepts a single `.txt`
/// file; its content is read as UTF-8 text and handed to the view-model
/// as staged content, leaving the event list untouched.
#[function_component(Dropzone)]
pub fn dropzone(props: &DropzoneProps) -> Html {
    let hover = use_state(|| false);

    let ondragover = {
        let hover = hover.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            hover.set(true);
        })
    };
    let ondragleave = {
        let hover = hover.clone();
        Callback::from(move |_: DragEvent| hover.set(false))
    };
    let ondrop = {
        let hover = hover.clone();
        let on_staged = props.on_staged.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            hover.set(false);
            let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            else {
                tracing::warn!("drop contained no files");
                return;
            };
            read_text_file(file, on_staged.clone());
        })
    };

    let class = if *hover {
        "dropzone dropzone-hover"
    } else {
        "dropzone"
    };

    html! {
        <div {class} {ondragover} {ondragleave} {ondrop}>
            <p>{ "Drag and drop events file here" }</p>
        </div>
    }
}

fn read_text_file(file: File, on_staged: Callback<String>) {
    let name = file.name();
    if !name.to_ascii_lowercase().ends_with(".txt") {
        tracing::warn!(file = %name, "ignored non-.txt drop");
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(file.text()).await {
            Ok(value) => {
                let content = value.as_string().unwrap_or_default();
                tracing::info!(file = %name, bytes = content.len(), "read dropped file");
                on_staged.emit(content);
            }
            Err(err) => {
                // Fire-and-forget: a failed read is logged and dropped.
                tracing::error!(error = ?err, file = %name, "failed reading dropped file");
            }
        }
    });
}
