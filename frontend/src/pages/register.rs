use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::registration_form::RegistrationForm;
use crate::Route;

#[function_component(Register)]
pub fn register() -> Html {
    let navigator = use_navigator().unwrap();

    let on_success = Callback::from(move |slug: String| {
        debug!("Registration succeeded, opening contestant {}", slug);
        navigator.push(&Route::ContestantDetails { slug });
    });

    html! {
        <div class="min-h-screen">
            <section class="relative w-full py-20 md:py-32 bg-blue-700 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-black/20 to-transparent" />
                <div class="relative max-w-4xl mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-white mb-4 drop-shadow-lg">
                        {"Register Your Child"}
                    </h1>
                    <div class="w-24 h-1 bg-white/60 mx-auto rounded-full" />
                </div>
            </section>

            <section class="py-16 px-4 bg-blue-700">
                <div class="max-w-lg mx-auto">
                    <p class="text-white/85 text-center mb-8">
                        {"Fill in the details below to enter your child into the contest."}
                    </p>
                    <div class="bg-white/10 backdrop-blur rounded-xl p-6 border border-white/20">
                        <RegistrationForm {on_success} />
                    </div>
                </div>
            </section>
        </div>
    }
}
