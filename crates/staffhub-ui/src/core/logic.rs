//! Pure request/response helpers extracted from the wasm layer for
//! non-wasm testing.

use chrono::NaiveDate;
use staffhub_api_models::{LeaveBalanceRecord, LeaveType};

/// How the dispatcher should treat a `GET /details` response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailsFetch {
    /// HTTP 404: the caller has no details record yet. Not an error.
    NotYetCreated,
    /// Success status: decode the body (record, or the server's own
    /// not-yet-created sentinel message).
    Decode,
    /// Any other status: propagate a failure to the caller.
    Fail,
}

/// Classify a details-fetch status. Only 404 is softened; every other
/// non-success status stays an error.
#[must_use]
pub const fn classify_details_status(status: u16) -> DetailsFetch {
    match status {
        404 => DetailsFetch::NotYetCreated,
        200..=299 => DetailsFetch::Decode,
        _ => DetailsFetch::Fail,
    }
}

/// Authorization header value for the given credential, if one is present.
/// Blank tokens produce no header, matching an anonymous request.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// Login form validation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginInputError {
    /// Username field is blank.
    MissingUsername,
    /// Password field is blank.
    MissingPassword,
}

impl LoginInputError {
    /// Inline message shown next to the form.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingUsername => "Username is required",
            Self::MissingPassword => "Password is required",
        }
    }
}

/// Validate the login form fields.
///
/// # Errors
/// Returns the first blank field as a [`LoginInputError`].
pub fn validate_login(username: &str, password: &str) -> Result<(), LoginInputError> {
    if username.trim().is_empty() {
        return Err(LoginInputError::MissingUsername);
    }
    if password.trim().is_empty() {
        return Err(LoginInputError::MissingPassword);
    }
    Ok(())
}

/// Leave-request form validation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaveInputError {
    /// Start or end date missing or unparsable.
    MissingDates,
    /// End date earlier than start date.
    EndBeforeStart,
    /// Reason field is blank.
    MissingReason,
    /// Requested span exceeds the remaining balance for the category.
    InsufficientBalance {
        /// Days still available for the requested category.
        available: i32,
    },
}

impl LeaveInputError {
    /// Inline message shown next to the form.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MissingDates => "Start and end dates are required".to_string(),
            Self::EndBeforeStart => "End date cannot be before start date".to_string(),
            Self::MissingReason => "A reason is required".to_string(),
            Self::InsufficientBalance { available } => {
                format!("Insufficient leave balance: {available} day(s) available")
            }
        }
    }
}

/// Number of calendar days a leave request spans, inclusive of both ends.
#[must_use]
pub fn leave_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Validate a leave-request form and return the requested day count.
///
/// The balance check mirrors the request form: when a balance row exists for
/// the chosen category, the span must fit the remaining days; with no row the
/// request is allowed through and the server decides.
///
/// # Errors
/// Returns a [`LeaveInputError`] describing the first failed check.
pub fn validate_leave_request(
    leave_type: LeaveType,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    reason: &str,
    balances: &[LeaveBalanceRecord],
) -> Result<i64, LeaveInputError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Err(LeaveInputError::MissingDates);
    };
    if end < start {
        return Err(LeaveInputError::EndBeforeStart);
    }
    if reason.trim().is_empty() {
        return Err(LeaveInputError::MissingReason);
    }
    let days = leave_day_count(start, end);
    if let Some(balance) = balances
        .iter()
        .find(|balance| balance.leave_type == leave_type)
    {
        if days > i64::from(balance.remaining_days) {
            return Err(LeaveInputError::InsufficientBalance {
                available: balance.remaining_days,
            });
        }
    }
    Ok(days)
}

/// Format the dashboard clock as 12-hour `hh:mm:ss AM/PM`.
#[must_use]
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hours:02}:{minutes:02}:{seconds:02} {meridiem}")
}

#[cfg(test)]
mod tests {
    use super::{
        DetailsFetch, LeaveInputError, LoginInputError, bearer_header, classify_details_status,
        format_clock, leave_day_count, validate_leave_request, validate_login,
    };
    use chrono::NaiveDate;
    use staffhub_api_models::{LeaveBalanceRecord, LeaveType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn balance(leave_type: LeaveType, remaining: i32) -> LeaveBalanceRecord {
        LeaveBalanceRecord {
            leave_type,
            total_days: 15,
            used_days: 15 - remaining,
            remaining_days: remaining,
            year: 2025,
        }
    }

    #[test]
    fn only_not_found_is_softened() {
        assert_eq!(classify_details_status(404), DetailsFetch::NotYetCreated);
        assert_eq!(classify_details_status(200), DetailsFetch::Decode);
        assert_eq!(classify_details_status(500), DetailsFetch::Fail);
        assert_eq!(classify_details_status(401), DetailsFetch::Fail);
        assert_eq!(classify_details_status(403), DetailsFetch::Fail);
    }

    #[test]
    fn bearer_header_present_iff_token_present() {
        assert_eq!(bearer_header(None), None);
        assert_eq!(bearer_header(Some("  ")), None);
        assert_eq!(
            bearer_header(Some("tok-1")).as_deref(),
            Some("Bearer tok-1")
        );
    }

    #[test]
    fn login_validation_requires_both_fields() {
        assert_eq!(
            validate_login("", "secret"),
            Err(LoginInputError::MissingUsername)
        );
        assert_eq!(
            validate_login("maria", " "),
            Err(LoginInputError::MissingPassword)
        );
        assert!(validate_login("maria", "secret").is_ok());
    }

    #[test]
    fn leave_day_count_is_inclusive() {
        let day = date(2025, 3, 10);
        assert_eq!(leave_day_count(day, day), 1);
        assert_eq!(leave_day_count(day, date(2025, 3, 14)), 5);
    }

    #[test]
    fn leave_validation_checks_dates_reason_and_balance() {
        let balances = vec![balance(LeaveType::Annual, 3)];
        assert_eq!(
            validate_leave_request(LeaveType::Annual, None, None, "trip", &balances),
            Err(LeaveInputError::MissingDates)
        );
        assert_eq!(
            validate_leave_request(
                LeaveType::Annual,
                Some(date(2025, 3, 14)),
                Some(date(2025, 3, 10)),
                "trip",
                &balances
            ),
            Err(LeaveInputError::EndBeforeStart)
        );
        assert_eq!(
            validate_leave_request(
                LeaveType::Annual,
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 11)),
                "  ",
                &balances
            ),
            Err(LeaveInputError::MissingReason)
        );
        assert_eq!(
            validate_leave_request(
                LeaveType::Annual,
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 14)),
                "trip",
                &balances
            ),
            Err(LeaveInputError::InsufficientBalance { available: 3 })
        );
        assert_eq!(
            validate_leave_request(
                LeaveType::Annual,
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 12)),
                "trip",
                &balances
            ),
            Ok(3)
        );
        // No balance row for the category: the server decides.
        assert_eq!(
            validate_leave_request(
                LeaveType::Sick,
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 20)),
                "flu",
                &balances
            ),
            Ok(11)
        );
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        assert_eq!(format_clock(0, 5, 9), "12:05:09 AM");
        assert_eq!(format_clock(12, 0, 0), "12:00:00 PM");
        assert_eq!(format_clock(15, 30, 45), "03:30:45 PM");
        assert_eq!(format_clock(23, 59, 59), "11:59:59 PM");
    }
}
