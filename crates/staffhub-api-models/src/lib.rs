#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the StaffHub HRMS API.
//!
//! These types are re-used by every service client in the UI crate so the
//! wire contract stays in one place. Field names follow the server's JSON
//! (camelCase property names, SCREAMING enum values), so the serde renames
//! here are the single source of truth for the mapping.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sentinel message the server uses when an account exists but its employee
/// details record has not been filled in yet.
pub const DETAILS_NOT_YET_CREATED: &str = "Employee details not yet created";

/// Role attached to every authenticated account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access, including HR account creation.
    Admin,
    /// Human-resources staff: employee onboarding and leave approvals.
    Hr,
    /// Regular employee: own profile and leave requests only.
    Employee,
}

impl Role {
    /// Every recognized role, in precedence order for display.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Hr, Self::Employee];

    /// Wire name of the role as the server emits it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Hr => "HR",
            Self::Employee => "EMPLOYEE",
        }
    }

    /// Parse a wire name back into a role. Unknown names yield `None`;
    /// callers treat that the same as an absent role.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "HR" => Some(Self::Hr),
            "EMPLOYEE" => Some(Self::Employee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic `{ "message": ... }` body the server uses for acknowledgements,
/// soft-empty sentinels, and error payloads alike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Human-readable message text.
    pub message: String,
}

/// Credentials posted to `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password, sent in the clear over TLS.
    pub password: String,
}

/// Successful login payload. The token is an opaque bearer credential; the
/// remaining fields seed the client session record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Role granted to the account.
    pub role: Role,
    /// Account username, echoed back for display.
    pub username: String,
    /// Numeric account id.
    pub user_id: i64,
    /// Position title, when the account has one assigned.
    #[serde(default)]
    pub position: Option<String>,
}

/// Position reference embedded in account bodies. The server resolves it to
/// an existing position by title and rejects unknown titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionRef {
    /// Position title, e.g. "HR-Supervisor" or "Developer".
    pub title: String,
}

/// Body for `POST /create-hr` and `POST /create-employee`. The server
/// requires a position for HR and employee accounts; only admin creation
/// goes without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccountRequest {
    /// Username for the new account.
    pub username: String,
    /// Initial password for the new account.
    pub password: String,
    /// Position to attach, resolved server-side by title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionRef>,
}

/// Minimal account reference embedded in other records (e.g. the requester
/// or approver on a leave request).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    /// Numeric account id.
    pub user_id: i64,
    /// Account username.
    pub username: String,
    /// Role, when the server includes it on the nested record.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Employee details record as returned by `GET /details` and accepted by
/// `PUT /update-profile`. The server substitutes empty strings for unset
/// fields, so everything is a plain `String` here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailsRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Phone or other contact number.
    pub contact: String,
    /// Department name.
    pub department: String,
    /// Postal address.
    pub address: String,
}

/// Raw body of `GET /details`. A `200` can carry either the details record
/// or the not-yet-created sentinel message; the untagged decode keeps that
/// distinction without inspecting JSON by hand at call sites.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DetailsBody {
    /// Sentinel or error message body.
    Message(ApiMessage),
    /// Fully populated details record.
    Details(EmployeeDetailsRecord),
}

/// Leave categories the server recognizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    /// Paid annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Emergency leave.
    Emergency,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Bereavement leave.
    Bereavement,
}

impl LeaveType {
    /// Every leave category, in the order the request form lists them.
    pub const ALL: [Self; 7] = [
        Self::Annual,
        Self::Sick,
        Self::Personal,
        Self::Emergency,
        Self::Maternity,
        Self::Paternity,
        Self::Bereavement,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "ANNUAL",
            Self::Sick => "SICK",
            Self::Personal => "PERSONAL",
            Self::Emergency => "EMERGENCY",
            Self::Maternity => "MATERNITY",
            Self::Paternity => "PATERNITY",
            Self::Bereavement => "BEREAVEMENT",
        }
    }

    /// Parse a wire name back into a category.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Label shown in the request form selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual Leave",
            Self::Sick => "Sick Leave",
            Self::Personal => "Personal Leave",
            Self::Emergency => "Emergency Leave",
            Self::Maternity => "Maternity Leave",
            Self::Paternity => "Paternity Leave",
            Self::Bereavement => "Bereavement Leave",
        }
    }
}

/// Lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting an HR decision.
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
}

impl LeaveStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

/// Body for `POST /submit` on the leave-request service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeaveRequest {
    /// Requested leave category.
    pub leave_type: LeaveType,
    /// First day of leave, inclusive.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// Free-text justification.
    pub reason: String,
}

/// Full leave-request record as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestRecord {
    /// Record id.
    pub id: i64,
    /// Requesting account, when the server embeds it.
    #[serde(default)]
    pub employee: Option<AccountRef>,
    /// Requested leave category.
    pub leave_type: LeaveType,
    /// First day of leave, inclusive.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// Free-text justification.
    pub reason: String,
    /// Current decision state.
    pub status: LeaveStatus,
    /// Deciding account, once a decision exists.
    #[serde(default)]
    pub approved_by: Option<AccountRef>,
    /// Comments attached to the decision.
    #[serde(default)]
    pub approval_comments: Option<String>,
    /// Server-side creation timestamp (no timezone on the wire).
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Server-side update timestamp.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body for `PUT /approve/{id}` and `PUT /reject/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaveDecisionRequest {
    /// Optional comments recorded with the decision.
    #[serde(default)]
    pub comments: String,
}

/// Per-category leave balance row from `GET /balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalanceRecord {
    /// Leave category the balance applies to.
    pub leave_type: LeaveType,
    /// Total allocation for the year.
    pub total_days: i32,
    /// Days already taken or committed.
    pub used_days: i32,
    /// Days still available.
    pub remaining_days: i32,
    /// Calendar year of the allocation.
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::{
        ApiMessage, DETAILS_NOT_YET_CREATED, DetailsBody, EmployeeDetailsRecord, LeaveType,
        LoginResponse, NewAccountRequest, PositionRef, Role,
    };

    #[test]
    fn role_names_round_trip_and_reject_unknown() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_name("SUPERUSER"), None);
        assert_eq!(Role::from_name("hr"), None);
    }

    #[test]
    fn login_response_uses_server_field_names() {
        let body = r#"{"token":"abc","role":"HR","username":"maria","userId":7}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.role, Role::Hr);
        assert_eq!(parsed.user_id, 7);
        assert_eq!(parsed.position, None);
    }

    #[test]
    fn details_body_distinguishes_record_from_sentinel() {
        let record = r#"{"firstName":"Ana","lastName":"Cruz","email":"a@x.io",
            "contact":"555","department":"Eng","address":"Cebu"}"#;
        match serde_json::from_str::<DetailsBody>(record).unwrap() {
            DetailsBody::Details(details) => assert_eq!(details.first_name, "Ana"),
            DetailsBody::Message(_) => panic!("record decoded as message"),
        }

        let sentinel = format!(r#"{{"message":"{DETAILS_NOT_YET_CREATED}"}}"#);
        match serde_json::from_str::<DetailsBody>(&sentinel).unwrap() {
            DetailsBody::Message(ApiMessage { message }) => {
                assert_eq!(message, DETAILS_NOT_YET_CREATED);
            }
            DetailsBody::Details(_) => panic!("sentinel decoded as record"),
        }
    }

    #[test]
    fn details_record_serializes_camel_case() {
        let details = EmployeeDetailsRecord {
            first_name: "Ana".into(),
            ..EmployeeDetailsRecord::default()
        };
        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"firstName\":\"Ana\""));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn new_account_request_nests_position_by_title() {
        let request = NewAccountRequest {
            username: "hr2".into(),
            password: "changeme".into(),
            position: Some(PositionRef {
                title: "HR-Supervisor".into(),
            }),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""position":{"title":"HR-Supervisor"}"#));
    }

    #[test]
    fn leave_type_covers_form_options() {
        assert_eq!(LeaveType::ALL.len(), 7);
        assert_eq!(LeaveType::from_name("SICK"), Some(LeaveType::Sick));
        assert_eq!(LeaveType::from_name("SABBATICAL"), None);
    }
}
