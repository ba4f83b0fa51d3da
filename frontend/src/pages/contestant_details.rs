use log::{debug, error};
use shared::slug::is_valid_slug;
use shared::Contestant;
use yew::prelude::*;

use crate::api::contestants::get_contestant_by_slug;
use crate::components::photo_editor::PhotoEditor;

#[derive(Properties, PartialEq)]
pub struct ContestantDetailsProps {
    pub slug: String,
}

#[function_component(ContestantDetails)]
pub fn contestant_details(props: &ContestantDetailsProps) -> Html {
    let contestant = use_state(|| None::<Contestant>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // Bumped by the photo editor to trigger a re-fetch
    let revision = use_state(|| 0u32);

    {
        let contestant = contestant.clone();
        let loading = loading.clone();
        let error = error.clone();
        let slug = props.slug.clone();

        use_effect_with((slug, *revision), move |(slug, _)| {
            let slug = slug.clone();
            if is_valid_slug(&slug) {
                wasm_bindgen_futures::spawn_local(async move {
                    error.set(None);
                    match get_contestant_by_slug(&slug).await {
                        Ok(found) => {
                            debug!("Loaded contestant {}: {}", slug, found.is_some());
                            contestant.set(found);
                        }
                        Err(e) => {
                            error!("Failed to load contestant {}: {}", slug, e);
                            error.set(Some(e.message));
                        }
                    }
                    loading.set(false);
                });
            } else {
                debug!("Ignoring malformed contestant slug: {}", slug);
                contestant.set(None);
                loading.set(false);
            }
            || ()
        });
    }

    let on_update = {
        let revision = revision.clone();
        Callback::from(move |_| revision.set(*revision + 1))
    };

    if *loading {
        return html! {
            <div class="flex justify-center py-20 text-gray-600">{"Loading contestant..."}</div>
        };
    }

    if let Some(message) = (*error).as_ref() {
        return html! {
            <div class="max-w-lg mx-auto my-16 p-4 bg-red-100 border border-red-400 text-red-700 rounded">
                {format!("Could not load contestant: {}", message)}
            </div>
        };
    }

    let Some(contestant) = (*contestant).clone() else {
        return html! {
            <div class="max-w-lg mx-auto my-16 text-center text-gray-700">
                <h2 class="text-2xl font-bold mb-2">{"Contestant not found"}</h2>
                <p>{format!("No contestant is registered as \"{}\".", props.slug)}</p>
            </div>
        };
    };

    html! {
        <section class="py-16 px-4 bg-blue-700 min-h-screen">
            <div class="max-w-md mx-auto flex flex-col items-center text-white">
                <div class="relative">
                    if contestant.has_photo() {
                        <img
                            src={contestant.photo_url.clone().unwrap_or_default()}
                            alt={contestant.full_name.clone()}
                            class="w-40 h-40 rounded-full object-cover border-4 border-white/60"
                        />
                    } else {
                        <div class="w-40 h-40 rounded-full bg-white/20 flex items-center justify-center text-5xl border-4 border-white/60">
                            {"👶"}
                        </div>
                    }
                    <PhotoEditor contestant_id={contestant.id.clone()} {on_update} />
                </div>
                <h1 class="mt-6 text-3xl font-bold">{&contestant.full_name}</h1>
                <p class="mt-2 text-sm text-white/70">{"Click the pencil to choose a new photo"}</p>
            </div>
        </section>
    }
}
