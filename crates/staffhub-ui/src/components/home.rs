//! Public landing page.

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <div class="hero">
            <h1>{"StaffHub"}</h1>
            <p>{"People operations for growing teams."}</p>
            <Link<Route> to={Route::Login} classes="solid">{"Sign in"}</Link<Route>>
        </div>
    }
}
