// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use tracing::{debug, info};

use crate::cli::CommandArgs;
use crate::core::action::TerminationAction;
use crate::core::error::Error;
use crate::services::invoker::{Invoke, SystemInvoker};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A delayed invocation. Owned by the single timer path that created it
/// and consumed when the timer fires.
struct PendingRequest {
    action: TerminationAction,
    delay: Duration,
}

pub async fn run(args: CommandArgs) -> Result<(), AnyError> {
    let invoker = SystemInvoker::for_command();
    run_with(&args, &invoker).await.map_err(AnyError::from)
}

/// Validate the flag set down to at most one action.
///
/// More than one exclusive flag is fatal before anything is dispatched;
/// none at all is a valid no-op invocation.
pub fn selected_action(args: &CommandArgs) -> Result<Option<TerminationAction>, Error> {
    let flags = [
        (args.logout, TerminationAction::LogOut),
        (args.poweroff, TerminationAction::PowerOff),
        (args.reboot, TerminationAction::Reboot),
        (args.hibernate, TerminationAction::Hibernate),
        (args.suspend, TerminationAction::Suspend),
    ];

    let mut chosen = None;
    for (set, action) in flags {
        if !set {
            continue;
        }
        if chosen.is_some() {
            return Err(Error::ConflictingFlags);
        }
        chosen = Some(action);
    }

    Ok(chosen)
}

/// The scripted path: trusted caller, no capability probing, no prompt.
/// Exactly one invocation, optionally deferred.
pub async fn run_with<I: Invoke>(args: &CommandArgs, invoker: &I) -> Result<(), Error> {
    let Some(action) = selected_action(args)? else {
        debug!("no action requested");
        return Ok(());
    };

    if args.delay > 0 {
        let pending = PendingRequest {
            action,
            delay: Duration::from_millis(args.delay as u64),
        };

        info!("scheduling {:?} in {} ms", pending.action, args.delay);
        tokio::time::sleep(pending.delay).await;
        invoker.invoke(pending.action).await
    } else {
        invoker.invoke(action).await
    }
}
