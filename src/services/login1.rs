// Author: Dustin Pilgrim
// License: MIT

use tracing::{debug, warn};
use zbus::{Connection, Proxy};

use crate::core::action::Capability;
use crate::core::surface::CapabilitySource;

const LOGIN1_DEST: &str = "org.freedesktop.login1";
const LOGIN1_PATH: &str = "/org/freedesktop/login1";
const LOGIN1_IFACE: &str = "org.freedesktop.login1.Manager";

/// login1 answers "yes", "no" or "challenge"; anything but an exact
/// "yes" counts as denied.
pub fn allows(reply: &str) -> bool {
    reply == "yes"
}

/// Client for the system power backend.
///
/// An unreachable system bus is not an error at this level: every
/// capability simply reads as denied and the prompt offers fewer
/// choices.
pub struct Login1 {
    connection: Option<Connection>,
}

impl Login1 {
    pub async fn connect() -> Self {
        let connection = match Connection::system().await {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("login1: could not connect to system bus: {e}");
                None
            }
        };

        Self { connection }
    }

    #[cfg(test)]
    fn disconnected() -> Self {
        Self { connection: None }
    }

    /// Probe one capability method by name. Unrecognized names are denied
    /// without touching the bus.
    pub async fn probe_method(&self, method: &str) -> bool {
        match Capability::from_method_name(method) {
            Some(capability) => self.can(capability).await,
            None => false,
        }
    }

    /// Synchronous in effect: awaited inline on the control flow, once
    /// per prompt construction.
    pub async fn can(&self, capability: Capability) -> bool {
        let Some(connection) = &self.connection else {
            return false;
        };

        let proxy = match Proxy::new(connection, LOGIN1_DEST, LOGIN1_PATH, LOGIN1_IFACE).await {
            Ok(p) => p,
            Err(e) => {
                warn!("login1: manager proxy unavailable: {e}");
                return false;
            }
        };

        let reply: zbus::Result<String> = proxy.call(capability.method_name(), &()).await;
        match reply {
            Ok(answer) => allows(&answer),
            Err(e) => {
                debug!("login1: {} failed: {e}", capability.method_name());
                false
            }
        }
    }
}

impl CapabilitySource for Login1 {
    async fn can(&self, capability: Capability) -> bool {
        Login1::can(self, capability).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_literal_yes_allows() {
        assert!(allows("yes"));

        for reply in ["no", "challenge", "Yes", "yes ", "", "maybe"] {
            assert!(!allows(reply));
        }
    }

    #[tokio::test]
    async fn unrecognized_methods_are_denied_before_the_bus() {
        // A disconnected client would answer false for real capabilities
        // too, but an unknown name must short-circuit in name validation.
        let login1 = Login1::disconnected();
        assert!(!login1.probe_method("CanFrobnicate").await);
        assert!(!login1.probe_method("").await);
    }

    #[tokio::test]
    async fn unreachable_backend_denies_every_capability() {
        let login1 = Login1::disconnected();

        for capability in [
            Capability::CanPowerOff,
            Capability::CanReboot,
            Capability::CanSuspend,
            Capability::CanHibernate,
        ] {
            assert!(!login1.can(capability).await);
        }
    }
}
