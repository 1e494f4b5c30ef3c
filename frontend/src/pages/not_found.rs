use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of range."}</p>
            <Link<Route> to={Route::Home} classes="get-demo">{"Back to BioLife"}</Link<Route>>
        </div>
    }
}
