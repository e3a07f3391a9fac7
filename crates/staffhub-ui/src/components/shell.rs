//! Application chrome: navbar with session display and logout.

use crate::app::Route;
use crate::app::session::BrowserSession;
use crate::app::store::{AppStore, refresh_session};
use crate::core::session::clear_session;
use staffhub_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let (store, _) = use_store::<AppStore>();
    let navigator = use_navigator();

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            clear_session(&BrowserSession);
            refresh_session();
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Login);
            }
        })
    };

    let session = &store.session;
    let nav_links = session.role.map_or_else(
        || html! {},
        |role| match role {
            Role::Employee => html! {
                <>
                    <Link<Route> to={Route::EmployeeDashboard}>{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::EmployeeProfile}>{"My Profile"}</Link<Route>>
                    <Link<Route> to={Route::EmployeeLeave}>{"Leave"}</Link<Route>>
                </>
            },
            Role::Hr => html! {
                <>
                    <Link<Route> to={Route::HrDashboard}>{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::HrProfile}>{"My Profile"}</Link<Route>>
                    <Link<Route> to={Route::HrLeave}>{"Approvals"}</Link<Route>>
                </>
            },
            Role::Admin => html! {
                <Link<Route> to={Route::AdminDashboard}>{"Dashboard"}</Link<Route>>
            },
        },
    );

    html! {
        <div class="app-shell">
            <header class="navbar">
                <Link<Route> to={Route::Home} classes="brand">{"StaffHub"}</Link<Route>>
                <nav class="nav-links">{nav_links}</nav>
                {match (&session.username, session.role) {
                    (Some(username), Some(role)) => html! {
                        <div class="session">
                            <span class="who">{format!("{username} ({role})")}</span>
                            <button class="ghost" onclick={on_logout}>{"Log out"}</button>
                        </div>
                    },
                    _ => html! {
                        <Link<Route> to={Route::Login} classes="ghost">{"Sign in"}</Link<Route>>
                    },
                }}
            </header>
            <main class="content">{ for props.children.iter() }</main>
        </div>
    }
}
