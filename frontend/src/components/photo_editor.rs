use chrono::Utc;
use gloo::file::futures::read_as_bytes;
use gloo::file::File;
use log::{debug, warn};
use shared::{
    Notification, Notifier, PhotoFile, PhotoReplaceWorkflow, PhotoUpdateError, ServiceError,
    SubmissionGate,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::contestants::SupabaseTable;
use crate::api::storage::SupabaseStorage;
use crate::components::common_toast::ToastContext;
use crate::config::Config;

/// MIME filter for the file picker
pub const IMAGE_ACCEPT: &str = "image/*";

#[derive(Properties, PartialEq)]
pub struct PhotoEditorProps {
    pub contestant_id: String,
    /// Called once after the new photo has been saved
    pub on_update: Callback<()>,
}

/// Pencil button that replaces the contestant's photo as soon as a file is
/// picked. Disabled while an upload is running.
#[function_component(PhotoEditor)]
pub fn photo_editor(props: &PhotoEditorProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let input_ref = use_node_ref();
    let loading = use_state(|| false);
    let gate = use_state(SubmissionGate::new);

    let on_click = {
        let input_ref = input_ref.clone();
        let gate = (*gate).clone();
        Callback::from(move |_: MouseEvent| {
            if gate.is_busy() {
                return;
            }
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_change = {
        let gate = (*gate).clone();
        let loading = loading.clone();
        let contestant_id = props.contestant_id.clone();
        let on_update = props.on_update.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(selected) = input.files().and_then(|files| files.get(0)) else {
                debug!("File picker closed without a selection");
                return;
            };
            let Some(ticket) = gate.try_acquire() else {
                warn!("Photo upload already in progress, ignoring selection");
                input.set_value("");
                return;
            };

            loading.set(true);
            let loading = loading.clone();
            let contestant_id = contestant_id.clone();
            let on_update = on_update.clone();
            let toast_context = toast_context.clone();

            spawn_local(async move {
                let attempt =
                    upload_selected(File::from(selected), &contestant_id, &toast_context, on_update);
                ticket
                    .settle(attempt, || {
                        // Clear the input so picking the same file again fires `change`
                        input.set_value("");
                        loading.set(false);
                    })
                    .await;
            });
        })
    };

    html! {
        <>
            <button
                type="button"
                onclick={on_click}
                disabled={*loading}
                aria-label="Edit photo"
                class="absolute bottom-0 right-0 bg-white rounded-full p-2 shadow-lg hover:bg-gray-100 transition-colors border-2 border-blue-700 disabled:opacity-50"
            >
                if *loading {
                    <svg class="animate-spin h-4 w-4 text-blue-700" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                        <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                        <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
                    </svg>
                } else {
                    <span class="block h-4 w-4 text-blue-700 leading-4 text-center">{"✎"}</span>
                }
            </button>
            <input
                ref={input_ref}
                type="file"
                accept={IMAGE_ACCEPT}
                class="hidden"
                onchange={on_change}
            />
        </>
    }
}

async fn upload_selected(
    file: File,
    contestant_id: &str,
    notifier: &ToastContext,
    on_update: Callback<()>,
) {
    let bytes = match read_as_bytes(&file).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not read {}: {}", file.name(), e);
            let error = PhotoUpdateError::UploadFailure(ServiceError::network(e.to_string()));
            notifier.notify(Notification::photo_failed(&error));
            return;
        }
    };

    let photo = PhotoFile::new(file.name(), file.raw_mime_type(), bytes);
    let workflow = PhotoReplaceWorkflow::new(Config::photo_bucket(), Config::contestants_table());

    // Outcome is already reported through the notifier
    let _ = workflow
        .run(
            &SupabaseStorage::from_config(),
            &SupabaseTable::from_config(),
            notifier,
            contestant_id,
            &photo,
            Utc::now().timestamp_millis(),
            || on_update.emit(()),
        )
        .await;
}
