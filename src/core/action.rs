// Author: Dustin Pilgrim
// License: MIT

/// A termination request, as chosen on the prompt or via a command flag.
///
/// Immutable once chosen; each variant knows its privileged dispatch
/// keyword, its login1 gate and the label used when dispatch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationAction {
    LogOut,
    PowerOff,
    Reboot,
    Hibernate,
    Suspend,
}

impl TerminationAction {
    /// Keyword passed to the service-control binary. Log out never goes
    /// through the privileged path.
    pub fn service_token(self) -> Option<&'static str> {
        match self {
            TerminationAction::PowerOff => Some("poweroff"),
            TerminationAction::Reboot => Some("reboot"),
            TerminationAction::Suspend => Some("suspend"),
            TerminationAction::Hibernate => Some("hibernate"),
            TerminationAction::LogOut => None,
        }
    }

    /// Capability gating this action on the prompt. Log out is always
    /// offered.
    pub fn capability(self) -> Option<Capability> {
        match self {
            TerminationAction::PowerOff => Some(Capability::CanPowerOff),
            TerminationAction::Reboot => Some(Capability::CanReboot),
            TerminationAction::Suspend => Some(Capability::CanSuspend),
            TerminationAction::Hibernate => Some(Capability::CanHibernate),
            TerminationAction::LogOut => None,
        }
    }

    /// Diagnostic label for a failed dispatch.
    pub fn failure_label(self) -> &'static str {
        match self {
            TerminationAction::LogOut => "Failed to call logout",
            TerminationAction::PowerOff => "Failed to call shutdown",
            TerminationAction::Reboot => "Failed to call reboot",
            TerminationAction::Hibernate => "Failed to call hibernate",
            TerminationAction::Suspend => "Failed to call suspend",
        }
    }
}

/// One of login1's Can* queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CanPowerOff,
    CanReboot,
    CanSuspend,
    CanHibernate,
}

impl Capability {
    pub fn method_name(self) -> &'static str {
        match self {
            Capability::CanPowerOff => "CanPowerOff",
            Capability::CanReboot => "CanReboot",
            Capability::CanSuspend => "CanSuspend",
            Capability::CanHibernate => "CanHibernate",
        }
    }

    /// Exactly the four recognized method names; anything else is not a
    /// capability and must never reach the bus.
    pub fn from_method_name(name: &str) -> Option<Capability> {
        match name {
            "CanPowerOff" => Some(Capability::CanPowerOff),
            "CanReboot" => Some(Capability::CanReboot),
            "CanSuspend" => Some(Capability::CanSuspend),
            "CanHibernate" => Some(Capability::CanHibernate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exactly_the_four_capability_methods() {
        for name in ["CanPowerOff", "CanReboot", "CanSuspend", "CanHibernate"] {
            let cap = Capability::from_method_name(name).unwrap();
            assert_eq!(cap.method_name(), name);
        }

        for name in ["CanFrobnicate", "canreboot", "Reboot", "", "yes"] {
            assert!(Capability::from_method_name(name).is_none());
        }
    }

    #[test]
    fn service_tokens_cover_the_privileged_actions_only() {
        assert_eq!(TerminationAction::PowerOff.service_token(), Some("poweroff"));
        assert_eq!(TerminationAction::Reboot.service_token(), Some("reboot"));
        assert_eq!(TerminationAction::Suspend.service_token(), Some("suspend"));
        assert_eq!(TerminationAction::Hibernate.service_token(), Some("hibernate"));
        assert_eq!(TerminationAction::LogOut.service_token(), None);
    }

    #[test]
    fn log_out_is_never_capability_gated() {
        assert_eq!(TerminationAction::LogOut.capability(), None);
        assert!(TerminationAction::PowerOff.capability().is_some());
    }
}
