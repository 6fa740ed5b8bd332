// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use tokio::time::sleep;

use crate::core::error::Error;

/// Probing-grab hooks, implemented by the decision surface.
pub trait InputGrab {
    fn try_grab_input(&mut self) -> bool;
    fn release_grab(&mut self);
}

/// Retry policy for the probing keyboard grab.
#[derive(Debug, Clone, Copy)]
pub struct GrabPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for GrabPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 40,
            interval: Duration::from_millis(50),
        }
    }
}

/// Wait until a probing input grab succeeds, then release it again.
///
/// The prompt performs its own grab once it is shown; this handshake only
/// establishes that the seat is grabbable at all before the surface turns
/// interactive. An exhausted bound comes back as `GrabTimeout` so the
/// caller can log it; the prompt is shown either way.
///
/// The sleep between attempts is cooperative, so an event loop sharing
/// this task keeps running.
pub async fn wait_for_input_grab<G: InputGrab>(
    grab: &mut G,
    policy: GrabPolicy,
) -> Result<(), Error> {
    for attempt in 1..=policy.max_attempts {
        if grab.try_grab_input() {
            grab.release_grab();
            return Ok(());
        }

        if attempt < policy.max_attempts {
            sleep(policy.interval).await;
        }
    }

    Err(Error::GrabTimeout {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    struct CountingGrab {
        attempts: u32,
        releases: u32,
        succeed_after: Option<u32>,
    }

    impl CountingGrab {
        fn failing() -> Self {
            Self {
                attempts: 0,
                releases: 0,
                succeed_after: None,
            }
        }

        fn succeeding_after(failures: u32) -> Self {
            Self {
                attempts: 0,
                releases: 0,
                succeed_after: Some(failures),
            }
        }
    }

    impl InputGrab for CountingGrab {
        fn try_grab_input(&mut self) -> bool {
            self.attempts += 1;
            match self.succeed_after {
                Some(failures) => self.attempts > failures,
                None => false,
            }
        }

        fn release_grab(&mut self) {
            self.releases += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_the_bound_when_the_grab_never_succeeds() {
        let mut grab = CountingGrab::failing();
        let started = Instant::now();

        let result = wait_for_input_grab(&mut grab, GrabPolicy::default()).await;

        assert_eq!(result, Err(Error::GrabTimeout { attempts: 40 }));
        assert_eq!(grab.attempts, 40);
        assert_eq!(grab.releases, 0);

        // 39 sleeps of 50 ms between the 40 attempts.
        assert_eq!(started.elapsed(), Duration::from_millis(1950));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_releases_the_probe_without_sleeping() {
        let mut grab = CountingGrab::succeeding_after(0);
        let started = Instant::now();

        let result = wait_for_input_grab(&mut grab, GrabPolicy::default()).await;

        assert_eq!(result, Ok(()));
        assert_eq!(grab.attempts, 1);
        assert_eq!(grab.releases, 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_retrying_once_the_grab_lands() {
        let mut grab = CountingGrab::succeeding_after(5);

        let result = wait_for_input_grab(&mut grab, GrabPolicy::default()).await;

        assert_eq!(result, Ok(()));
        assert_eq!(grab.attempts, 6);
        assert_eq!(grab.releases, 1);
    }
}
