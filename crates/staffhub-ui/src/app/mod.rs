//! App shell: router, shared contexts, and route table.

use crate::components::admin::AdminDashboard;
use crate::components::dashboard::EmployeeDashboard;
use crate::components::errors::{NotFoundView, UnauthorizedView};
use crate::components::guard::RequireRole;
use crate::components::home::HomePage;
use crate::components::hr::HrDashboard;
use crate::components::leave::{EmployeeLeavePage, HrLeavePage};
use crate::components::login::LoginPage;
use crate::components::profile::{ProfilePage, ProfileScope};
use crate::components::shell::AppShell;
use api::ApiCtx;
use session::api_base_url;
use staffhub_api_models::Role;
use store::refresh_session;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod routes;
pub(crate) mod session;
pub(crate) mod store;

pub(crate) use routes::Route;

#[function_component(StaffHubApp)]
fn staff_hub_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(&api_base_url()), ());

    use_effect_with_deps(
        move |_| {
            refresh_session();
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <AppShell>
                    <Switch<Route> render={switch} />
                </AppShell>
            </ContextProvider<ApiCtx>>
        </BrowserRouter>
    }
}

fn guarded(allowed: Vec<Role>, content: Html) -> Html {
    html! { <RequireRole {allowed}>{content}</RequireRole> }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Unauthorized => html! { <UnauthorizedView /> },
        Route::NotFound => html! { <NotFoundView /> },
        Route::EmployeeDashboard => {
            guarded(vec![Role::Employee], html! { <EmployeeDashboard /> })
        }
        Route::EmployeeProfile => guarded(
            vec![Role::Employee],
            html! { <ProfilePage scope={ProfileScope::Employee} /> },
        ),
        Route::EmployeeLeave => guarded(vec![Role::Employee], html! { <EmployeeLeavePage /> }),
        Route::HrDashboard => guarded(vec![Role::Hr], html! { <HrDashboard /> }),
        Route::HrProfile => guarded(
            vec![Role::Hr],
            html! { <ProfilePage scope={ProfileScope::Hr} /> },
        ),
        Route::HrLeave => guarded(vec![Role::Hr], html! { <HrLeavePage /> }),
        Route::AdminDashboard => guarded(vec![Role::Admin], html! { <AdminDashboard /> }),
    }
}

/// Mount the application at the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<StaffHubApp>::new().render();
}
