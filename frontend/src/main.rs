use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod dom;
mod simulation;
mod booking;
mod carousel;
mod viewer;
mod section;
mod components {
    pub mod navbar;
    pub mod footer;
    pub mod reveal;
    pub mod info_card;
    pub mod model_viewer;
    pub mod power_chart;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod why;
    pub mod status;
    pub mod timeline;
    pub mod team;
    pub mod book;
}
mod pages {
    pub mod home;
    pub mod solution;
    pub mod not_found;
}

use pages::{
    home::Home,
    solution::SolutionPage,
    not_found::NotFound,
};
use section::Section;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Book,
    #[at("/team")]
    Team,
    #[at("/solution")]
    Solution,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Book => {
            info!("Rendering Home page at booking");
            html! { <Home focus={Section::Book} /> }
        },
        Route::Team => {
            info!("Rendering Home page at team");
            html! { <Home focus={Section::Team} /> }
        },
        Route::Solution => {
            info!("Rendering Solution page");
            html! { <SolutionPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        error!("error initializing log: {}", e);
    }

    info!("Starting BioLife");
    yew::Renderer::<App>::new().render();
}
