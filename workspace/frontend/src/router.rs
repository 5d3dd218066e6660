use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::Dashboard;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Path the welcome page's call to action navigates to.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Welcome page");
            html! { <Home /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}
