// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The session or system bus could not be reached at all.
    ///
    /// Capability probes degrade to "denied" instead of surfacing this;
    /// only an actual dispatch attempt reports it.
    BackendUnavailable,

    /// The backend accepted the request but the call or spawn failed.
    ///
    /// Carries the per-action diagnostic label. Never retried.
    BackendCallFailed { label: &'static str },

    /// A required helper binary is missing from the execution path.
    ///
    /// Fatal to that single invocation, not to the process.
    HelperNotFound { helper: &'static str },

    /// More than one exclusive action flag was set on the command line.
    ConflictingFlags,

    /// The probing keyboard grab never succeeded within its bound.
    ///
    /// Soft failure: callers log it and show the prompt anyway.
    GrabTimeout { attempts: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendUnavailable =>
                write!(f, "session backend unavailable"),
            Error::BackendCallFailed { label } =>
                write!(f, "{label}"),
            Error::HelperNotFound { helper } =>
                write!(f, "{helper} not found in PATH"),
            Error::ConflictingFlags =>
                write!(f, "Program called with conflicting options"),
            Error::GrabTimeout { attempts } =>
                write!(f, "failed to grab the keyboard after {attempts} attempts"),
        }
    }
}

impl std::error::Error for Error {}
