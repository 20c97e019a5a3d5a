//! Exit status codes and the coordinator that consumes them.
//!
//! "The run finished with code X" and "the process should terminate now" are
//! separate concerns: a standalone invocation wants the process to exit with
//! the status, while an embedding host (a test harness, a build tool plugin)
//! must survive the call and read the status afterwards. [`ExitCoordinator`]
//! holds that decision as an explicit construction-time flag instead of a
//! hidden ambient switch; the one ambient read lives in
//! [`ExitCoordinator::from_environment`] and is performed once at the entry
//! point.

use std::env;
use std::fmt;
use std::process;

/// Name of the environment variable that, when set to any value, marks the
/// process as an embedding host: `finish` records the status instead of
/// terminating.
pub const NO_EXIT_ENV_VAR: &str = "SRCLINT_NO_EXIT";

/// A terminal status code for one driver invocation.
///
/// The closed set covers the driver's own outcomes; anything else produced by
/// the analysis engine is carried through unchanged as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCode {
    /// The run completed with nothing requiring attention. Exit code `0`.
    Success,
    /// A usage or execution error occurred. Exit code `1`.
    Error,
    /// Analysis completed and found reportable violations. Exit code `4`.
    ViolationsFound,
    /// Any other non-negative code returned by the analysis engine, passed
    /// through unchanged.
    Other(i32),
}

impl StatusCode {
    /// The process exit code for this status.
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Error => 1,
            Self::ViolationsFound => 4,
            Self::Other(code) => code,
        }
    }

    /// Maps a raw engine code back into the closed set where possible.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::Error,
            4 => Self::ViolationsFound,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Decides whether a known status terminates the process or is merely
/// recorded.
///
/// The embedding mode is fixed at construction. In standalone mode `finish`
/// never returns; in embedded mode the status is recorded on the coordinator
/// (last writer wins) and returned, so the embedding caller that owns the
/// coordinator can read it back via [`ExitCoordinator::recorded`].
#[derive(Debug, Default)]
pub struct ExitCoordinator {
    embedded: bool,
    recorded: Option<StatusCode>,
}

impl ExitCoordinator {
    /// Creates a coordinator with an explicit embedding mode.
    ///
    /// Embedding callers pass `true`; the standalone binary passes the result
    /// of the ambient check done in `from_environment`.
    pub fn new(embedded: bool) -> Self {
        Self {
            embedded,
            recorded: None,
        }
    }

    /// Creates a coordinator whose embedding mode is read from the
    /// environment: any value in [`NO_EXIT_ENV_VAR`] means embedded.
    ///
    /// This is the only ambient read in the crate and is intended to be
    /// called once, at the outermost entry point.
    pub fn from_environment() -> Self {
        Self::new(env::var_os(NO_EXIT_ENV_VAR).is_some())
    }

    /// Returns `true` when `finish` will record instead of terminate.
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Consumes a terminal status.
    ///
    /// Standalone: terminates the process with the status as its exit code;
    /// this call does not return. Embedded: records the status, overwriting
    /// any previous one, and returns it.
    pub fn finish(&mut self, status: StatusCode) -> StatusCode {
        if !self.embedded {
            process::exit(status.code());
        }
        self.recorded = Some(status);
        status
    }

    /// The status recorded by the most recent embedded `finish` call, if any.
    pub fn recorded(&self) -> Option<StatusCode> {
        self.recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_status_codes_match_the_contract() {
        assert_eq!(StatusCode::Success.code(), 0);
        assert_eq!(StatusCode::Error.code(), 1);
        assert_eq!(StatusCode::ViolationsFound.code(), 4);
        assert_eq!(StatusCode::Other(7).code(), 7);
    }

    #[test]
    fn test_from_code_normalizes_known_codes() {
        assert_eq!(StatusCode::from_code(0), StatusCode::Success);
        assert_eq!(StatusCode::from_code(1), StatusCode::Error);
        assert_eq!(StatusCode::from_code(4), StatusCode::ViolationsFound);
        assert_eq!(StatusCode::from_code(42), StatusCode::Other(42));
    }

    #[test]
    fn test_display_renders_the_exit_code() {
        assert_eq!(StatusCode::ViolationsFound.to_string(), "4");
    }

    #[test]
    fn test_embedded_finish_records_and_returns() {
        let mut coordinator = ExitCoordinator::new(true);
        assert_eq!(coordinator.recorded(), None);
        let returned = coordinator.finish(StatusCode::ViolationsFound);
        assert_eq!(returned, StatusCode::ViolationsFound);
        assert_eq!(coordinator.recorded(), Some(StatusCode::ViolationsFound));
    }

    #[test]
    fn test_embedded_finish_is_last_writer_wins() {
        let mut coordinator = ExitCoordinator::new(true);
        coordinator.finish(StatusCode::Error);
        coordinator.finish(StatusCode::Success);
        assert_eq!(coordinator.recorded(), Some(StatusCode::Success));
    }

    #[test]
    #[serial]
    fn test_from_environment_detects_the_switch() {
        // SAFETY: single-threaded within this #[serial] test.
        unsafe { env::set_var(NO_EXIT_ENV_VAR, "1") };
        assert!(ExitCoordinator::from_environment().is_embedded());
        unsafe { env::remove_var(NO_EXIT_ENV_VAR) };
        assert!(!ExitCoordinator::from_environment().is_embedded());
    }

    #[test]
    #[serial]
    fn test_any_value_in_the_switch_means_embedded() {
        // The contract is presence, not content: even an empty value counts.
        // SAFETY: single-threaded within this #[serial] test.
        unsafe { env::set_var(NO_EXIT_ENV_VAR, "") };
        assert!(ExitCoordinator::from_environment().is_embedded());
        unsafe { env::remove_var(NO_EXIT_ENV_VAR) };
    }
}
