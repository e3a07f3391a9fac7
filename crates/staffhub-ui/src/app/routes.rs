//! Routing definitions for the StaffHub UI.
use staffhub_api_models::Role;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/401")]
    Unauthorized,
    #[at("/employee")]
    EmployeeDashboard,
    #[at("/employee/profile")]
    EmployeeProfile,
    #[at("/employee/leave")]
    EmployeeLeave,
    #[at("/hr")]
    HrDashboard,
    #[at("/hr/profile")]
    HrProfile,
    #[at("/hr/leave")]
    HrLeave,
    #[at("/admin")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Dashboard a fresh login lands on, by role.
    pub(crate) const fn landing_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Hr => Self::HrDashboard,
            Role::Employee => Self::EmployeeDashboard,
        }
    }
}
