//! Error types shared across the Morph core layer.
//!
//! Configuration failures in this layer are deliberately data-shaped: name
//! resolution reports `Option`, parameter assignment reports `bool`. The
//! types below cover the two surfaces where a structured error is the
//! natural return value.

use thiserror::Error;

/// Error produced when a text string resolves to no energy term.
///
/// Returned by the `FromStr` impl of [`EnergyKind`](crate::EnergyKind);
/// the lenient lookup [`EnergyKind::from_name`](crate::EnergyKind::from_name)
/// reports the same condition as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown energy term name {name:?}")]
pub struct UnknownEnergyName {
    /// The text that failed to resolve.
    pub name: String,
}

/// Error produced when a parameter value cannot be parsed as the requested
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {text:?} as {target}")]
pub struct ParseValueError {
    /// The text that failed to parse.
    pub text: String,
    /// Name of the requested target type.
    pub target: &'static str,
}
