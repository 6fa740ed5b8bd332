// Author: Dustin Pilgrim
// License: MIT

use tracing::{info, warn};

use crate::core::arbiter::Arbiter;
use crate::core::grab::{self, GrabPolicy};
use crate::core::surface::{offered_choices, CapabilitySource, DecisionSurface};
use crate::services::console::ConsoleSurface;
use crate::services::invoker::{Invoke, SystemInvoker};
use crate::services::login1::Login1;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run() -> Result<(), AnyError> {
    let login1 = Login1::connect().await;
    let mut surface = ConsoleSurface::new();
    let invoker = SystemInvoker::for_prompt();

    run_prompt(&login1, &mut surface, &invoker).await
}

/// Drive one prompt instance end to end: probe, grab, present,
/// arbitrate, dispatch.
pub async fn run_prompt<C, S, I>(caps: &C, surface: &mut S, invoker: &I) -> Result<(), AnyError>
where
    C: CapabilitySource,
    S: DecisionSurface,
    I: Invoke,
{
    // Fresh probes on every prompt; policy can change between runs.
    let choices = offered_choices(caps).await;

    if let Err(e) = grab::wait_for_input_grab(surface, GrabPolicy::default()).await {
        warn!("{e}; showing the prompt without exclusive input");
    }

    let mut arbiter = Arbiter::new();
    let decision = surface.present(&choices);
    let chosen = arbiter.decide(decision);

    // Close before dispatching: a second decision racing the teardown
    // must find the arbiter terminal, and for log out the session can
    // end before the invoker returns.
    surface.close();
    arbiter.close();

    let Some(action) = chosen else {
        return Ok(());
    };

    info!("dispatching {action:?}");
    if let Err(e) = invoker.invoke(action).await {
        warn!("{e}");
    }

    Ok(())
}
