//! Error types for viewport construction and lifecycle transitions.
//!
//! Input handling never fails: missing drag state, zero touches or a rejected
//! zoom step are ordinary outcomes and are reported as no-ops.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticError {
    /// The hosting element is `<html>` or `<body>`.
    #[error("Root element cannot be HTML or BODY")]
    RootElement,

    /// The hosting element must wrap its content in exactly one child.
    #[error("Root element should contain just one child, put contents inside it (found {found})")]
    ChildCount { found: usize },

    #[error("Already initialized")]
    AlreadyActive,

    #[error("Already destroyed")]
    AlreadyDestroyed,

    /// Configuration object could not be read.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl KineticError {
    /// Element shape problems found at construction.
    pub fn is_structural(&self) -> bool {
        matches!(self, KineticError::RootElement | KineticError::ChildCount { .. })
    }

    /// `reinitialize` while active or `destroy` while inactive.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, KineticError::AlreadyActive | KineticError::AlreadyDestroyed)
    }
}

impl From<serde_json::Error> for KineticError {
    fn from(e: serde_json::Error) -> Self {
        KineticError::InvalidSettings(e.to_string())
    }
}

pub type KineticResult<T> = Result<T, KineticError>;
