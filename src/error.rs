//! Error types for the string-typed API boundary.
//!
//! The typed engine itself never fails: every (key, tuning) drawn from the
//! enumerations yields a layout, and unrecognized note combinations during
//! chord search are skipped rather than reported. Errors only arise when
//! parsing host-supplied names.

use thiserror::Error;

/// Errors from parsing host-supplied names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarpError {
    /// A note or key name matching none of the twelve pitch classes.
    ///
    /// # Example
    /// ```
    /// # use harplay::HarpError;
    /// let err = HarpError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: H");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    /// A tuning name matching none of the five supported tunings.
    ///
    /// # Example
    /// ```
    /// # use harplay::HarpError;
    /// let err = HarpError::UnknownTuning("paddy".to_string());
    /// assert_eq!(err.to_string(), "Unknown tuning: paddy");
    /// ```
    #[error("Unknown tuning: {0}")]
    UnknownTuning(String),
}
