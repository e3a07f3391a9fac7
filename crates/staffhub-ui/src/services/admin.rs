//! Admin service client: account creation endpoints.

use crate::services::api::{ApiClient, ApiError};
use staffhub_api_models::NewAccountRequest;

/// Client for the `/admin` service.
#[derive(Clone, Debug)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    /// Create a client rooted at `<base_url>/admin`.
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(format!("{base_url}/admin")),
        }
    }

    /// `POST /create-hr`: provision an HR account. Returns the server's
    /// plain-text acknowledgement.
    ///
    /// # Errors
    /// Propagates any [`ApiError`]; the server answers 400 with a reason
    /// when the username is taken.
    pub async fn create_hr(&self, account: &NewAccountRequest) -> Result<String, ApiError> {
        self.client.post_for_text("/create-hr", account).await
    }

    /// `POST /create-employee`: provision an employee account.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn create_employee(&self, account: &NewAccountRequest) -> Result<String, ApiError> {
        self.client.post_for_text("/create-employee", account).await
    }
}
