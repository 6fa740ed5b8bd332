// Author: Dustin Pilgrim
// License: MIT

use crate::core::action::TerminationAction;
use crate::core::arbiter::{Arbiter, Phase};
use crate::core::surface::Decision;

#[test]
fn a_choice_dispatches_exactly_once() {
    let mut arbiter = Arbiter::new();

    let first = arbiter.decide(Decision::Choice(TerminationAction::PowerOff));
    assert_eq!(first, Some(TerminationAction::PowerOff));
    assert_eq!(arbiter.phase(), Phase::Dispatching);

    // A second click racing the teardown must not re-fire.
    let second = arbiter.decide(Decision::Choice(TerminationAction::PowerOff));
    assert_eq!(second, None);
}

#[test]
fn decisions_after_close_are_ignored() {
    let mut arbiter = Arbiter::new();
    arbiter.close();
    assert_eq!(arbiter.phase(), Phase::Closed);

    for decision in [
        Decision::Choice(TerminationAction::Reboot),
        Decision::Choice(TerminationAction::LogOut),
        Decision::Cancel,
        Decision::Dismissed,
    ] {
        assert_eq!(arbiter.decide(decision), None);
        assert_eq!(arbiter.phase(), Phase::Closed);
    }
}

#[test]
fn cancel_closes_without_dispatch() {
    let mut arbiter = Arbiter::new();

    assert_eq!(arbiter.decide(Decision::Cancel), None);
    assert_eq!(arbiter.phase(), Phase::Closed);

    assert_eq!(
        arbiter.decide(Decision::Choice(TerminationAction::Suspend)),
        None
    );
}

#[test]
fn dismissal_closes_without_dispatch() {
    let mut arbiter = Arbiter::new();

    assert_eq!(arbiter.decide(Decision::Dismissed), None);
    assert_eq!(arbiter.phase(), Phase::Closed);
}

#[test]
fn close_after_dispatch_stays_terminal() {
    let mut arbiter = Arbiter::new();

    let action = arbiter.decide(Decision::Choice(TerminationAction::Hibernate));
    assert_eq!(action, Some(TerminationAction::Hibernate));

    arbiter.close();
    assert_eq!(arbiter.phase(), Phase::Closed);
    assert_eq!(arbiter.decide(Decision::Cancel), None);
}
