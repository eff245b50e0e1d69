//! Domain-level error type used across the engine, stats stores and config.
//!
//! Illegal moves are NOT errors: they are expected on every mis-drop and are
//! reported as [`crate::domain::MoveRejection`] values inside an
//! [`crate::domain::ActionOutcome`]. `DomainError` covers malformed input,
//! broken invariants, configuration and storage failures.

use thiserror::Error;

/// Validation failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidDeck,
    CardConservation,
    InvalidSnapshot,
    UnsupportedVariant,
    Other,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    StorageUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or broken game invariant
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Bad or missing configuration
    #[error("configuration error: {0}")]
    Config(String),
    /// Storage / operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
