//! HTTP clients for the StaffHub services.
//!
//! Every request goes through [`api::ApiClient`], which attaches the bearer
//! credential from session storage at send time. The per-service modules
//! expose one thin typed method per endpoint; none of them retry or cache.

mod admin;
mod api;
mod auth;
mod employee;
mod hr;
mod leave;

pub use admin::AdminApi;
pub use api::{ApiClient, ApiError};
pub use auth::AuthApi;
pub use employee::EmployeeApi;
pub use hr::HrApi;
pub use leave::LeaveApi;
