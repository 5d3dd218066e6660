use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"404 Not Found"}</h1>
                    <p class="py-6">{"The page you are looking for does not exist."}</p>
                    <Link<Route> to={Route::Home} classes={classes!("link", "link-primary")}>{"Go to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
