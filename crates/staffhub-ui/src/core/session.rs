//! Session storage access and role resolution.
//!
//! # Design
//! - Storage is reached through the [`SessionStore`] trait so tests run
//!   against an in-memory map instead of the browser.
//! - Two legacy shapes coexist: the `user` JSON record and the plain
//!   `userRole` string. The record wins when both are present.
//! - Resolution is best effort and never returns an error to the caller:
//!   malformed records are logged and treated as absent.

use serde::Deserialize;
use staffhub_api_models::{LoginResponse, Role};
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON identity record (`{"role": ...}`).
pub const USER_KEY: &str = "user";
/// Storage key holding the legacy plain role string.
pub const ROLE_KEY: &str = "userRole";
/// Storage key holding the display username.
pub const USERNAME_KEY: &str = "username";
/// Storage key holding the numeric account id.
pub const USER_ID_KEY: &str = "userId";
/// Storage key holding the position title, when assigned.
pub const POSITION_KEY: &str = "position";

/// Minimal key/value session storage. Values are raw strings exactly as the
/// login flow persisted them; any JSON decoding happens in this module.
pub trait SessionStore {
    /// Read the raw value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`. Failures are logged, not surfaced.
    fn set(&self, key: &str, value: &str);
    /// Delete `key` if present.
    fn remove(&self, key: &str);
}

/// Shape of the persisted `user` record. Extra fields are ignored so older
/// login flows that stored more than the role keep working.
#[derive(Debug, Deserialize)]
struct IdentityRecord {
    #[serde(default)]
    role: Option<String>,
}

/// Resolve the session role, preferring the `user` record over the legacy
/// `userRole` fallback. Unrecognized or empty role strings do not resolve.
#[must_use]
pub fn resolve_role<S: SessionStore + ?Sized>(store: &S) -> Option<Role> {
    if let Some(raw) = store.get(USER_KEY) {
        match serde_json::from_str::<IdentityRecord>(&raw) {
            Ok(record) => {
                if let Some(role) = record
                    .role
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .and_then(Role::from_name)
                {
                    return Some(role);
                }
            }
            Err(err) => log_malformed_record(&err),
        }
    }
    store.get(ROLE_KEY).and_then(|raw| Role::from_name(&raw))
}

/// Read the bearer credential, treating blank values as absent.
#[must_use]
pub fn credential_token<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

/// Persist a successful login response under the session keys the resolver
/// reads back. The identity record carries the role; the legacy `userRole`
/// key is not written by this flow.
pub fn persist_login<S: SessionStore + ?Sized>(store: &S, login: &LoginResponse) {
    store.set(TOKEN_KEY, &login.token);
    store.set(USERNAME_KEY, &login.username);
    store.set(USER_ID_KEY, &login.user_id.to_string());
    store.set(
        USER_KEY,
        &serde_json::json!({ "role": login.role.as_str() }).to_string(),
    );
    match &login.position {
        Some(position) => store.set(POSITION_KEY, position),
        None => store.remove(POSITION_KEY),
    }
}

/// Wipe every session key on logout.
pub fn clear_session<S: SessionStore + ?Sized>(store: &S) {
    for key in [
        TOKEN_KEY,
        USER_KEY,
        ROLE_KEY,
        USERNAME_KEY,
        USER_ID_KEY,
        POSITION_KEY,
    ] {
        store.remove(key);
    }
}

/// Snapshot of the session fields the shell displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionProfile {
    /// Display username, when logged in.
    pub username: Option<String>,
    /// Resolved role, when one resolves.
    pub role: Option<Role>,
    /// Position title, when assigned.
    pub position: Option<String>,
}

/// Load the display snapshot the navbar renders.
#[must_use]
pub fn session_profile<S: SessionStore + ?Sized>(store: &S) -> SessionProfile {
    SessionProfile {
        username: store.get(USERNAME_KEY),
        role: resolve_role(store),
        position: store.get(POSITION_KEY),
    }
}

#[cfg(target_arch = "wasm32")]
fn log_malformed_record(err: &serde_json::Error) {
    gloo::console::error!("malformed identity record, ignoring", err.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_malformed_record(_err: &serde_json::Error) {}

/// In-memory [`SessionStore`] used by host-side tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        MemoryStore, ROLE_KEY, SessionStore, TOKEN_KEY, USER_KEY, USERNAME_KEY, clear_session,
        credential_token, persist_login, resolve_role, session_profile,
    };
    use staffhub_api_models::{LoginResponse, Role};

    #[test]
    fn identity_record_takes_precedence_over_role_token() {
        let store = MemoryStore::default();
        store.set(USER_KEY, r#"{"role":"HR"}"#);
        store.set(ROLE_KEY, "EMPLOYEE");
        assert_eq!(resolve_role(&store), Some(Role::Hr));
    }

    #[test]
    fn malformed_identity_record_falls_through_to_role_token() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "not json at all {");
        store.set(ROLE_KEY, "EMPLOYEE");
        assert_eq!(resolve_role(&store), Some(Role::Employee));
    }

    #[test]
    fn empty_or_missing_role_field_falls_through() {
        let store = MemoryStore::default();
        store.set(USER_KEY, r#"{"role":""}"#);
        store.set(ROLE_KEY, "ADMIN");
        assert_eq!(resolve_role(&store), Some(Role::Admin));

        store.set(USER_KEY, r#"{"name":"maria"}"#);
        assert_eq!(resolve_role(&store), Some(Role::Admin));
    }

    #[test]
    fn unrecognized_roles_do_not_resolve() {
        let store = MemoryStore::default();
        store.set(USER_KEY, r#"{"role":"SUPERUSER"}"#);
        assert_eq!(resolve_role(&store), None);

        store.set(ROLE_KEY, "INTERN");
        assert_eq!(resolve_role(&store), None);
    }

    #[test]
    fn empty_store_resolves_nothing() {
        let store = MemoryStore::default();
        assert_eq!(resolve_role(&store), None);
        assert_eq!(credential_token(&store), None);
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "   ");
        assert_eq!(credential_token(&store), None);
        store.set(TOKEN_KEY, "tok-123");
        assert_eq!(credential_token(&store), Some("tok-123".to_string()));
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let store = MemoryStore::default();
        let login = LoginResponse {
            token: "tok-9".into(),
            role: Role::Employee,
            username: "jose".into(),
            user_id: 42,
            position: Some("Developer".into()),
        };
        persist_login(&store, &login);
        assert_eq!(credential_token(&store), Some("tok-9".to_string()));
        assert_eq!(resolve_role(&store), Some(Role::Employee));

        let profile = session_profile(&store);
        assert_eq!(profile.username.as_deref(), Some("jose"));
        assert_eq!(profile.position.as_deref(), Some("Developer"));

        clear_session(&store);
        assert_eq!(resolve_role(&store), None);
        assert_eq!(credential_token(&store), None);
        assert_eq!(store.get(USERNAME_KEY), None);
    }
}
