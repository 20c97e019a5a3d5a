//! Error types for the srclint driver.
//!
//! This module defines the error type produced by argument parsing and
//! parameter validation, providing specific variants for each failure mode so
//! callers (and tests) can distinguish them programmatically. Every variant
//! renders to a single-line message suitable for the standard error stream.

use std::fmt;

/// The main error type for driver operations.
///
/// `DriverError` covers the failure modes of argument parsing: unknown flags,
/// flags missing their value, values that cannot be interpreted, and missing
/// mandatory arguments. Each variant carries enough context to name the
/// offending flag or argument verbatim in its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// An argument was not recognized as a flag in the parameter schema.
    UnknownOption {
        /// The flag exactly as it appeared on the command line.
        flag: String,
    },

    /// A flag that requires a value was the last argument, or was followed
    /// by nothing usable.
    MissingValue {
        /// The flag that was missing its value.
        flag: String,
    },

    /// A flag received a value that could not be interpreted.
    InvalidValue {
        /// The flag the value was given for.
        flag: String,
        /// The value exactly as it appeared on the command line.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A positional argument appeared where only flags are accepted.
    UnexpectedArgument {
        /// The argument exactly as it appeared on the command line.
        value: String,
    },

    /// A mandatory argument was absent after all flags were consumed.
    MissingRequired {
        /// Description of the missing argument, including its flag.
        what: String,
    },
}

impl DriverError {
    /// Creates a new `UnknownOption` error for the given flag.
    pub fn unknown_option(flag: impl Into<String>) -> Self {
        Self::UnknownOption { flag: flag.into() }
    }

    /// Creates a new `MissingValue` error for the given flag.
    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }

    /// Creates a new `InvalidValue` error.
    pub fn invalid_value(
        flag: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            flag: flag.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new `UnexpectedArgument` error.
    pub fn unexpected_argument(value: impl Into<String>) -> Self {
        Self::UnexpectedArgument {
            value: value.into(),
        }
    }

    /// Creates a new `MissingRequired` error.
    pub fn missing_required(what: impl Into<String>) -> Self {
        Self::MissingRequired { what: what.into() }
    }

    /// Returns the name of the error variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnknownOption { .. } => "UnknownOption",
            Self::MissingValue { .. } => "MissingValue",
            Self::InvalidValue { .. } => "InvalidValue",
            Self::UnexpectedArgument { .. } => "UnexpectedArgument",
            Self::MissingRequired { .. } => "MissingRequired",
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption { flag } => {
                write!(f, "Unknown option: '{}'", flag)
            }
            Self::MissingValue { flag } => {
                write!(f, "Expected a value after option '{}'", flag)
            }
            Self::InvalidValue {
                flag,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for option '{}': {}",
                    value, flag, reason
                )
            }
            Self::UnexpectedArgument { value } => {
                write!(f, "Unexpected argument: '{}'", value)
            }
            Self::MissingRequired { what } => {
                write!(f, "Missing mandatory argument: {}", what)
            }
        }
    }
}

impl std::error::Error for DriverError {}

/// A type alias for `Result<T, DriverError>`.
///
/// This is the return type of every fallible parsing operation in this crate.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_names_the_flag() {
        let err = DriverError::unknown_option("-bogusflag");
        assert_eq!(err.name(), "UnknownOption");
        let display = format!("{}", err);
        assert!(
            display.contains("-bogusflag"),
            "message should name the offending flag: {}",
            display
        );
    }

    #[test]
    fn test_missing_value_names_the_flag() {
        let err = DriverError::missing_value("-f");
        assert_eq!(err.name(), "MissingValue");
        let display = format!("{}", err);
        assert!(display.contains("'-f'"));
        assert!(display.contains("value"));
    }

    #[test]
    fn test_invalid_value_includes_flag_value_and_reason() {
        let err = DriverError::invalid_value("-property", "noequals", "expected key=value");
        let display = format!("{}", err);
        assert!(display.contains("-property"));
        assert!(display.contains("noequals"));
        assert!(display.contains("expected key=value"));
    }

    #[test]
    fn test_unexpected_argument_names_the_argument() {
        let err = DriverError::unexpected_argument("stray.txt");
        let display = format!("{}", err);
        assert!(display.contains("stray.txt"));
    }

    #[test]
    fn test_missing_required_describes_the_argument() {
        let err = DriverError::missing_required("a report format (-f)");
        let display = format!("{}", err);
        assert!(display.contains("Missing mandatory argument"));
        assert!(display.contains("-f"));
    }

    #[test]
    fn test_messages_are_single_line() {
        let errors = vec![
            DriverError::unknown_option("-x"),
            DriverError::missing_value("-f"),
            DriverError::invalid_value("-property", "a", "b"),
            DriverError::unexpected_argument("c"),
            DriverError::missing_required("d"),
        ];
        for err in errors {
            let display = format!("{}", err);
            assert!(
                !display.contains('\n'),
                "diagnostics must be single-line: {}",
                display
            );
        }
    }

    #[test]
    fn test_question_mark_operator_works_with_result() {
        fn may_fail(should_fail: bool) -> Result<i32> {
            if should_fail {
                Err(DriverError::unknown_option("-x"))
            } else {
                Ok(42)
            }
        }

        fn uses_question_mark(should_fail: bool) -> Result<i32> {
            let val = may_fail(should_fail)?;
            Ok(val + 8)
        }

        assert_eq!(uses_question_mark(false), Ok(50));
        assert!(uses_question_mark(true).is_err());
    }
}
