use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonColor, ButtonVariant};
use crate::router::Route;

pub const WELCOME_TITLE: &str = "Welcome to Cybersecurity Training!";
pub const WELCOME_TAGLINE: &str = "Learn how to protect yourself from cyber threats!";
pub const START_LEARNING_LABEL: &str = "Start Learning";

/// Landing page shown at `/`. Stateless: every render yields the same tree.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{WELCOME_TITLE}</h1>
                    <p class="py-6">{WELCOME_TAGLINE}</p>
                    <Link<Route> to={Route::Dashboard}>
                        <Button variant={ButtonVariant::Contained} color={ButtonColor::Primary}>
                            {START_LEARNING_LABEL}
                        </Button>
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
