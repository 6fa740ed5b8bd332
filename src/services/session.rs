// Author: Dustin Pilgrim
// License: MIT

use tracing::warn;
use zbus::{Connection, Proxy};

use crate::core::action::TerminationAction;
use crate::core::error::Error;

const SESSION_DEST: &str = "org.gnome.SessionManager";
const SESSION_PATH: &str = "/org/gnome/SessionManager";
const SESSION_IFACE: &str = "org.gnome.SessionManager";

/// Logout(u) modes understood by the session manager.
#[allow(dead_code)]
mod logout_mode {
    pub const NORMAL: u32 = 0;
    /// Skip the session manager's own confirmation; not forced.
    pub const NO_CONFIRMATION: u32 = 1;
    pub const FORCE: u32 = 2;
}

/// Ask the session manager to end the session, skipping its own
/// confirmation prompt (the caller already confirmed or was scripted).
///
/// Fire-and-forget in intent: a backend error is reported once and never
/// retried, since the session may be half-way down already.
pub async fn request_logout() -> Result<(), Error> {
    let connection = Connection::session().await.map_err(|e| {
        warn!("session manager: could not connect to session bus: {e}");
        Error::BackendUnavailable
    })?;

    let proxy = Proxy::new(&connection, SESSION_DEST, SESSION_PATH, SESSION_IFACE)
        .await
        .map_err(|e| {
            warn!("session manager: proxy unavailable: {e}");
            Error::BackendUnavailable
        })?;

    proxy
        .call::<_, _, ()>("Logout", &(logout_mode::NO_CONFIRMATION,))
        .await
        .map_err(|e| {
            let label = TerminationAction::LogOut.failure_label();
            warn!("{label}: {e}");
            Error::BackendCallFailed { label }
        })
}
