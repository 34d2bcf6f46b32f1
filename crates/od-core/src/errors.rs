//! Error types for officedays.
//!
//! A single `thiserror`-derived enum covers every recoverable failure in the
//! lower crates. `ensure!` returns early with a precondition failure.

use thiserror::Error;

/// The top-level error type used throughout officedays.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, impossible day of month, ...).
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed into the requested value.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (e.g. `"ISO date"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::Parse`] for `input`.
    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            what,
            input: input.into(),
        }
    }
}

/// Shorthand `Result` type used throughout officedays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use od_core::{ensure, errors::Error};
/// fn weekday_number(n: u8) -> od_core::errors::Result<u8> {
///     ensure!(n <= 6, "weekday number must be in 0..=6, got {n}");
///     Ok(n)
/// }
/// assert!(weekday_number(5).is_ok());
/// assert!(weekday_number(9).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
