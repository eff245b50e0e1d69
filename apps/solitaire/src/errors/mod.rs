//! Error handling for the solitaire engine.

pub mod domain;

pub use domain::{DomainError, InfraErrorKind, ValidationKind};
