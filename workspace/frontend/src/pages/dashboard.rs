use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonColor, ButtonVariant};
use crate::router::Route;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-3xl mb-6">{"Dashboard"}</h1>
                    <p class="text-lg mb-4">
                        {"Your training modules will appear here."}
                    </p>
                    <div class="card-actions justify-end mt-6">
                        <Link<Route> to={Route::Home}>
                            <Button variant={ButtonVariant::Outlined} color={ButtonColor::Primary}>
                                {"Back to Home"}
                            </Button>
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
