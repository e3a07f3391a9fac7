//! App-wide yewdux store.
//!
//! # Design
//! - Only display state lives here (the navbar's session snapshot). The
//!   route guard deliberately bypasses the store and re-reads storage on
//!   every evaluation.

use crate::app::session::BrowserSession;
use crate::core::session::{SessionProfile, session_profile};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub(crate) struct AppStore {
    /// Session snapshot rendered by the shell.
    pub session: SessionProfile,
}

/// Re-read the session snapshot from storage into the store. Called after
/// login, logout, and app boot.
pub(crate) fn refresh_session() {
    let profile = session_profile(&BrowserSession);
    Dispatch::<AppStore>::new().reduce_mut(|store| store.session = profile);
}
