//! Boundary and error views.

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Boundary page at `/401` for sessions with no resolvable role.
#[function_component(UnauthorizedView)]
pub(crate) fn unauthorized_view() -> Html {
    html! {
        <div class="error-page">
            <h2>{"401"}</h2>
            <p>{"You need to sign in to view this page."}</p>
            <Link<Route> to={Route::Login} classes="solid">{"Go to login"}</Link<Route>>
        </div>
    }
}

/// Rendered in place when a signed-in role is not on a route's allow-list.
#[function_component(ForbiddenView)]
pub(crate) fn forbidden_view() -> Html {
    html! {
        <div class="error-page">
            <h2>{"403"}</h2>
            <p>{"Your role does not have access to this page."}</p>
            <Link<Route> to={Route::Home} classes="ghost">{"Back to home"}</Link<Route>>
        </div>
    }
}

/// Catch-all for unknown paths.
#[function_component(NotFoundView)]
pub(crate) fn not_found_view() -> Html {
    html! {
        <div class="error-page">
            <h2>{"404"}</h2>
            <p>{"That page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="ghost">{"Back to home"}</Link<Route>>
        </div>
    }
}
