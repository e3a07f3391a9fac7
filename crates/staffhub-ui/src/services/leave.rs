//! Leave-request service client.

use crate::services::api::{ApiClient, ApiError};
use staffhub_api_models::{
    LeaveBalanceRecord, LeaveDecisionRequest, LeaveRequestRecord, SubmitLeaveRequest,
};

/// Client for the `/leave-request` service.
#[derive(Clone, Debug)]
pub struct LeaveApi {
    client: ApiClient,
}

impl LeaveApi {
    /// Create a client rooted at `<base_url>/leave-request`.
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(format!("{base_url}/leave-request")),
        }
    }

    /// `POST /submit`: file a new leave request for the caller.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn submit(&self, request: &SubmitLeaveRequest) -> Result<LeaveRequestRecord, ApiError> {
        self.client.post_json("/submit", request).await
    }

    /// `GET /employee`: the caller's own leave requests, newest first.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn employee_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        self.client.get_json("/employee").await
    }

    /// `GET /hr`: pending requests awaiting an HR decision.
    ///
    /// # Errors
    /// Propagates any [`ApiError`]; the server answers 403 for HR staff
    /// without a supervisory position.
    pub async fn pending_for_hr(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        self.client.get_json("/hr").await
    }

    /// `PUT /approve/{id}`: approve a pending request.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn approve(
        &self,
        id: i64,
        decision: &LeaveDecisionRequest,
    ) -> Result<LeaveRequestRecord, ApiError> {
        self.client
            .put_json(&format!("/approve/{id}"), decision)
            .await
    }

    /// `PUT /reject/{id}`: reject a pending request.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn reject(
        &self,
        id: i64,
        decision: &LeaveDecisionRequest,
    ) -> Result<LeaveRequestRecord, ApiError> {
        self.client
            .put_json(&format!("/reject/{id}"), decision)
            .await
    }

    /// `GET /balance`: the caller's per-category balances for the year.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn balances(&self) -> Result<Vec<LeaveBalanceRecord>, ApiError> {
        self.client.get_json("/balance").await
    }

    /// `GET /pending-count`: number of requests still awaiting a decision.
    ///
    /// # Errors
    /// Propagates any [`ApiError`].
    pub async fn pending_count(&self) -> Result<i64, ApiError> {
        self.client.get_json("/pending-count").await
    }
}
