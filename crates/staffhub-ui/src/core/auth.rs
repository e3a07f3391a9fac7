//! Route-guard decision logic.
//!
//! # Design
//! - Keep the decision a pure function of (resolved role, allow-list) so the
//!   rendering layer only interprets a tag.
//! - No caching: callers re-evaluate on every render pass.
//! - An unresolved role always redirects, whatever the allow-list says.

use staffhub_api_models::Role;

/// Outcome of evaluating a protected route against the ambient session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// No role resolved: replace the current history entry with the
    /// unauthorized boundary page.
    RedirectToLogin,
    /// Role resolved but not in the allow-list: render the forbidden view in
    /// place, without navigating.
    Forbidden,
    /// Role resolved and permitted: render the protected content.
    Allow,
}

/// Decide what a protected route should do for the given resolved role.
///
/// There is no wildcard: an empty allow-list denies every resolved role, and
/// a missing role redirects regardless of the list's contents.
#[must_use]
pub fn authorize(role: Option<Role>, allowed: &[Role]) -> RouteOutcome {
    match role {
        None => RouteOutcome::RedirectToLogin,
        Some(role) if allowed.contains(&role) => RouteOutcome::Allow,
        Some(_) => RouteOutcome::Forbidden,
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteOutcome, authorize};
    use staffhub_api_models::Role;

    #[test]
    fn missing_role_redirects_for_every_allow_list() {
        assert_eq!(authorize(None, &[]), RouteOutcome::RedirectToLogin);
        assert_eq!(
            authorize(None, &[Role::Employee]),
            RouteOutcome::RedirectToLogin
        );
        // Even the full enumeration of recognized roles is not a wildcard.
        assert_eq!(authorize(None, &Role::ALL), RouteOutcome::RedirectToLogin);
    }

    #[test]
    fn role_outside_allow_list_is_forbidden_never_allowed() {
        for role in Role::ALL {
            let others: Vec<Role> = Role::ALL.into_iter().filter(|r| *r != role).collect();
            assert_eq!(authorize(Some(role), &others), RouteOutcome::Forbidden);
        }
        assert_eq!(
            authorize(Some(Role::Employee), &[Role::Hr, Role::Admin]),
            RouteOutcome::Forbidden
        );
    }

    #[test]
    fn member_of_allow_list_is_allowed() {
        assert_eq!(
            authorize(Some(Role::Employee), &[Role::Employee]),
            RouteOutcome::Allow
        );
        assert_eq!(
            authorize(Some(Role::Hr), &[Role::Hr, Role::Admin]),
            RouteOutcome::Allow
        );
    }

    #[test]
    fn empty_allow_list_denies_resolved_roles() {
        for role in Role::ALL {
            assert_eq!(authorize(Some(role), &[]), RouteOutcome::Forbidden);
        }
    }
}
