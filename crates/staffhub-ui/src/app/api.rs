//! API client context for sharing singleton service clients.
//!
//! # Design
//! - Create every service client exactly once per app boot, all bound to
//!   the same discovered base URL.
//! - Equality is pointer identity so context consumers never re-render on
//!   a clone.

use crate::services::{AdminApi, AuthApi, EmployeeApi, HrApi, LeaveApi};
use std::rc::Rc;

/// The service clients, one per backend service prefix.
pub(crate) struct Services {
    /// Per-audience login endpoints.
    pub auth: AuthApi,
    /// `/admin` account provisioning.
    pub admin: AdminApi,
    /// `/hr` provisioning and own-profile endpoints.
    pub hr: HrApi,
    /// `/employee` own-profile endpoints.
    pub employee: EmployeeApi,
    /// `/leave-request` endpoints.
    pub leave: LeaveApi,
}

/// Shared API context handed to components.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton service clients.
    pub services: Rc<Services>,
}

impl ApiCtx {
    /// Create a new context with every client bound to `base_url`.
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            services: Rc::new(Services {
                auth: AuthApi::new(base_url),
                admin: AdminApi::new(base_url),
                hr: HrApi::new(base_url),
                employee: EmployeeApi::new(base_url),
                leave: LeaveApi::new(base_url),
            }),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.services, &other.services)
    }
}
