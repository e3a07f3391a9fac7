//! Role gate wrapped around every protected route.

use crate::app::Route;
use crate::app::session::BrowserSession;
use crate::components::errors::ForbiddenView;
use crate::core::auth::{RouteOutcome, authorize};
use crate::core::session::resolve_role;
use staffhub_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RequireRoleProps {
    /// Roles permitted to view the nested content. No wildcard exists; an
    /// empty list denies every role.
    pub allowed: Vec<Role>,
    #[prop_or_default]
    pub children: Children,
}

/// Evaluate the guard decision for the nested content. Storage is re-read
/// on every render pass; the decision is never cached.
#[function_component(RequireRole)]
pub(crate) fn require_role(props: &RequireRoleProps) -> Html {
    let role = resolve_role(&BrowserSession);
    match authorize(role, &props.allowed) {
        RouteOutcome::RedirectToLogin => {
            html! { <Redirect<Route> to={Route::Unauthorized} /> }
        }
        RouteOutcome::Forbidden => html! { <ForbiddenView /> },
        RouteOutcome::Allow => html! { <>{ for props.children.iter() }</> },
    }
}
