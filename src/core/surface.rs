// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::{Capability, TerminationAction};
use crate::core::grab::InputGrab;

/// One selectable entry on the decision surface.
///
/// The icon name is a hint for graphical front-ends; the console surface
/// ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub action: TerminationAction,
    pub label: &'static str,
    pub icon_name: &'static str,
    pub description: &'static str,
}

/// Outcome of presenting the surface. Exactly one per prompt instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A choice bound to its control; never re-derived from surface state.
    Choice(TerminationAction),
    Cancel,
    /// The surface went away without an explicit choice.
    Dismissed,
}

/// Capability queries the choice list is gated on.
#[allow(async_fn_in_trait)]
pub trait CapabilitySource {
    async fn can(&self, capability: Capability) -> bool;
}

/// Contract between the orchestrator and whatever renders the prompt.
///
/// The `InputGrab` supertrait backs the probing grab of the retry
/// handshake; the surface performs its own grab once shown.
pub trait DecisionSurface: InputGrab {
    /// Show the choices and block until the user decides.
    fn present(&mut self, choices: &[Choice]) -> Decision;

    /// Tear the surface down. Decisions after this are ignored.
    fn close(&mut self);
}

const CHOICE_TABLE: [Choice; 5] = [
    Choice {
        action: TerminationAction::LogOut,
        label: "Log Out",
        icon_name: "system-log-out-symbolic",
        description: "Close all programs and log out.",
    },
    Choice {
        action: TerminationAction::Hibernate,
        label: "Hibernate",
        icon_name: "system-hibernate-symbolic",
        description: "Save user sessions in memory and put the computer into sleep state.",
    },
    Choice {
        action: TerminationAction::Suspend,
        label: "Suspend",
        icon_name: "system-suspend-symbolic",
        description: "Save user sessions in hard disk and turn off the computer.",
    },
    Choice {
        action: TerminationAction::Reboot,
        label: "Restart",
        icon_name: "system-restart-symbolic",
        description: "Shut down and automatically restart the computer.",
    },
    Choice {
        action: TerminationAction::PowerOff,
        label: "Shut Down",
        icon_name: "system-shutdown-symbolic",
        description: "Close all programs and turn off the computer.",
    },
];

/// Build the choice list for one prompt instance.
///
/// Gated entries are queried fresh every time; system policy can change
/// between prompts. An entry whose capability reads denied is simply not
/// offered, so choosing it is structurally impossible.
pub async fn offered_choices<C: CapabilitySource>(caps: &C) -> Vec<Choice> {
    let mut offered = Vec::with_capacity(CHOICE_TABLE.len());

    for choice in CHOICE_TABLE {
        match choice.action.capability() {
            None => offered.push(choice),
            Some(cap) => {
                if caps.can(cap).await {
                    offered.push(choice);
                }
            }
        }
    }

    offered
}
