use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod pages;
pub mod router;
pub mod settings;


pub use router::{switch, Route, DASHBOARD_PATH};

/// Route switch without a router of its own; the caller supplies the history.
#[function_component(AppRoutes)]
pub fn app_routes() -> Html {
    html! { <Switch<Route> render={switch} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppRoutes />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Cybersecurity Training Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
