//! View-facing result types shared between services and components.

use staffhub_api_models::{DetailsBody, EmployeeDetailsRecord};

/// Classified result of the details fetch. The not-yet-created case is a
/// deliberate non-error so views can offer the create-profile flow instead
/// of an error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsOutcome {
    /// The caller's details record exists.
    Ready(EmployeeDetailsRecord),
    /// The account exists but no details record has been created yet.
    NotYetCreated,
}

impl DetailsOutcome {
    /// Map a decoded success body onto the outcome. The server signals the
    /// not-yet-created case with a `200` sentinel message body.
    #[must_use]
    pub fn from_body(body: DetailsBody) -> Self {
        match body {
            DetailsBody::Details(details) => Self::Ready(details),
            DetailsBody::Message(_) => Self::NotYetCreated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DetailsOutcome;
    use staffhub_api_models::{ApiMessage, DETAILS_NOT_YET_CREATED, DetailsBody};

    #[test]
    fn sentinel_body_maps_to_not_yet_created() {
        let body = DetailsBody::Message(ApiMessage {
            message: DETAILS_NOT_YET_CREATED.to_string(),
        });
        assert_eq!(DetailsOutcome::from_body(body), DetailsOutcome::NotYetCreated);
    }

    #[test]
    fn record_body_maps_to_ready() {
        let details = staffhub_api_models::EmployeeDetailsRecord {
            first_name: "Ana".into(),
            ..Default::default()
        };
        let body = DetailsBody::Details(details.clone());
        assert_eq!(
            DetailsOutcome::from_body(body),
            DetailsOutcome::Ready(details)
        );
    }
}
