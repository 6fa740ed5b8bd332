// Author: Dustin Pilgrim
// License: MIT

use std::io;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{info, warn};

use crate::core::action::TerminationAction;
use crate::core::error::Error;
use crate::core::utils;
use crate::services::session;

const SERVICE_CONTROL: &str = "/bin/systemctl";
const ELEVATION_HELPER: &str = "pkexec";
const SESSION_QUIT_HELPER: &str = "/usr/bin/gnome-session-quit";

/// How a log-out request leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutRoute {
    /// Spawn the session-quit helper. Used behind the prompt, where the
    /// session manager would otherwise confirm a second time.
    QuitHelper,
    /// Ask the session manager over the session bus. Used by the
    /// scripted path.
    SessionBus,
}

/// Dispatches exactly one termination action against the privileged
/// backend. Success means "request dispatched", never "machine is down".
#[allow(async_fn_in_trait)]
pub trait Invoke {
    async fn invoke(&self, action: TerminationAction) -> Result<(), Error>;
}

pub struct SystemInvoker {
    logout_route: LogoutRoute,
}

impl SystemInvoker {
    pub fn for_prompt() -> Self {
        Self {
            logout_route: LogoutRoute::QuitHelper,
        }
    }

    pub fn for_command() -> Self {
        Self {
            logout_route: LogoutRoute::SessionBus,
        }
    }

    async fn log_out(&self) -> Result<(), Error> {
        match self.logout_route {
            LogoutRoute::SessionBus => session::request_logout().await,
            LogoutRoute::QuitHelper => {
                info!("log out: {SESSION_QUIT_HELPER} --force");

                let mut command = Command::new(SESSION_QUIT_HELPER);
                command.arg("--force");
                launch(command, TerminationAction::LogOut, "gnome-session-quit")
            }
        }
    }

    /// Elevate and hand the action keyword to the service-control
    /// binary. The command is not awaited; the machine may be gone
    /// before it exits.
    fn end_session(&self, action: TerminationAction, token: &'static str) -> Result<(), Error> {
        let Some(pkexec) = utils::find_in_path(ELEVATION_HELPER) else {
            warn!("{}: {ELEVATION_HELPER} not found in PATH", action.failure_label());
            return Err(Error::HelperNotFound {
                helper: ELEVATION_HELPER,
            });
        };

        info!("dispatch: {} {SERVICE_CONTROL} {token}", pkexec.display());

        let mut command = Command::new(pkexec);
        command.arg(SERVICE_CONTROL).arg(token);
        launch(command, action, ELEVATION_HELPER)
    }
}

impl Invoke for SystemInvoker {
    async fn invoke(&self, action: TerminationAction) -> Result<(), Error> {
        match action.service_token() {
            None => self.log_out().await,
            Some(token) => self.end_session(action, token),
        }
    }
}

/// Spawn detached with both pipes nulled. The child handle is dropped on
/// purpose; exit status is never collected.
fn launch(
    mut command: Command,
    action: TerminationAction,
    helper: &'static str,
) -> Result<(), Error> {
    match command.stdout(Stdio::null()).stderr(Stdio::null()).spawn() {
        Ok(_child) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{}: {helper} not found", action.failure_label());
            Err(Error::HelperNotFound { helper })
        }
        Err(e) => {
            warn!("{}: {e}", action.failure_label());
            Err(Error::BackendCallFailed {
                label: action.failure_label(),
            })
        }
    }
}
