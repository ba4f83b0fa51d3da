use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page max-w-lg mx-auto my-16 text-center">
            <h1 class="text-3xl font-bold mb-2">{"404 - Page Not Found"}</h1>
            <p class="mb-4">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Register} classes="text-blue-700 underline">
                {"Register a contestant"}
            </Link<Route>>
        </div>
    }
}
