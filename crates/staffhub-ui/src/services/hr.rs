//! HR service client: account creation plus the HR user's own profile.

use crate::core::logic::{DetailsFetch, classify_details_status};
use crate::models::DetailsOutcome;
use crate::services::api::{ApiClient, ApiError};
use staffhub_api_models::{ApiMessage, DetailsBody, EmployeeDetailsRecord, NewAccountRequest};

/// Client for the `/hr` service.
#[derive(Clone, Debug)]
pub struct HrApi {
    client: ApiClient,
}

impl HrApi {
    /// Create a client rooted at `<base_url>/hr`.
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(format!("{base_url}/hr")),
        }
    }

    /// `POST /create-hr`: provision another HR account.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
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

    /// `GET /details`: the caller's own details record. A 404 is softened to
    /// [`DetailsOutcome::NotYetCreated`]; every other non-success status is
    /// an error.
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

/// Shared details fetch used by the HR and employee services; both expose
/// the same `/details` contract.
pub(super) async fn fetch_details(client: &ApiClient) -> Result<DetailsOutcome, ApiError> {
    let response = client.get_raw("/details").await?;
    match classify_details_status(response.status()) {
        DetailsFetch::NotYetCreated => Ok(DetailsOutcome::NotYetCreated),
        DetailsFetch::Decode => {
            let body: DetailsBody = ApiClient::decode_json(response).await?;
            Ok(DetailsOutcome::from_body(body))
        }
        DetailsFetch::Fail => Err(ApiClient::error_from(response).await),
    }
}
