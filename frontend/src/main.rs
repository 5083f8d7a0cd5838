use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod calendly;
mod config;
mod scroll;
mod components {
    pub mod cards;
    pub mod contact_form;
    pub mod cta_button;
    pub mod header;
    pub mod lazy_image;
    pub mod notification;
    pub mod visibility;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::notification::NotificationProvider;
use components::visibility::WatcherProvider;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <WatcherProvider>
                    <Switch<Route> render={switch} />
                </WatcherProvider>
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
