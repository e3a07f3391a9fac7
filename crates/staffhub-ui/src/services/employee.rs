//! Employee service client: the employee's own profile.

use crate::models::DetailsOutcome;
use crate::services::api::{ApiClient, ApiError};
use crate::services::hr::fetch_details;
use staffhub_api_models::{ApiMessage, EmployeeDetailsRecord};

/// Client for the `/employee` service.
#[derive(Clone, Debug)]
pub struct EmployeeApi {
    client: ApiClient,
}

impl EmployeeApi {
    /// Create a client rooted at `<base_url>/employee`.
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(format!("{base_url}/employee")),
        }
    }

    /// `GET /details`: the caller's own details record, with the 404
    /// soft-empty classification.
    ///
    /// # Errors
    /// Propagates transport failures and non-404 error statuses.
    pub async fn fetch_current_user_details(&self) -> Result<DetailsOutcome, ApiError> {
        fetch_details(&self.client).await
    }

    /// `PUT /update-profile`: update the caller's own details record.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn update_profile(
        &self,
        details: &EmployeeDetailsRecord,
    ) -> Result<ApiMessage, ApiError> {
        self.client.put_json("/update-profile", details).await
    }
}
