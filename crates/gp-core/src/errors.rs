//! Error types for gridpricer.
//!
//! A single `thiserror`-derived enum covers every failure the pricer can
//! report. Input validation goes through the `ensure_config!` macro and
//! generic preconditions through `ensure!`.

use thiserror::Error;

/// The top-level error type used throughout gridpricer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid contract or grid parameters, detected before any computation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Shorthand `Result` type used throughout gridpricer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gp_core::{ensure, errors::Error};
/// fn positive(x: f64) -> gp_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gp_core::{ensure_config, errors::Error};
/// fn steps(n: usize) -> gp_core::errors::Result<usize> {
///     ensure_config!(n > 0, "number of steps must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(steps(10).is_ok());
/// assert!(matches!(steps(0), Err(Error::Configuration(_))));
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}
