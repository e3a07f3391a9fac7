//! Login client. Each audience signs in against its own service, so the
//! path is selected by the role being claimed.

use crate::services::api::{ApiClient, ApiError};
use staffhub_api_models::{LoginRequest, LoginResponse, Role};

/// Client for the per-audience `POST .../login` endpoints.
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Create a login client for the given site base URL (no service prefix).
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(base_url),
        }
    }

    const fn login_path(audience: Role) -> &'static str {
        match audience {
            Role::Admin => "/admin/login",
            Role::Hr => "/hr/login",
            Role::Employee => "/employee/login",
        }
    }

    /// Sign in as the given audience. The caller persists the returned
    /// session fields; no storage is touched here.
    ///
    /// # Errors
    /// Propagates any [`ApiError`], including 401 on bad credentials.
    pub async fn login(
        &self,
        audience: Role,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.client
            .post_json(Self::login_path(audience), credentials)
            .await
    }
}
