//! Error types for annotation, extraction and the [`ToolRegistry`](crate::ToolRegistry).

use serde_json::Error as JsonError;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/*───────────────────────────────────────────────────────────────────────────*/

/// Where an annotation name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    /// An entry of the required-parameter list.
    RequiredParams,
    /// A key of the parameter descriptions.
    ParameterDescriptions,
}

impl fmt::Display for NameOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameOrigin::RequiredParams => f.write_str("the required parameters"),
            NameOrigin::ParameterDescriptions => f.write_str("the parameter descriptions"),
        }
    }
}

/// Annotating a function with names that are not in its signature.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "The parameter '{parameter}' provided in {origin} was not found in the signature of \
         '{function}'. Please ensure that the parameter names in {origin} match exactly with \
         the parameter names defined in the function signature."
    )]
    ParameterNotFound {
        function: String,
        parameter: String,
        origin: NameOrigin,
    },
}

impl ConfigurationError {
    /// The offending parameter name.
    pub fn parameter(&self) -> &str {
        match self {
            ConfigurationError::ParameterNotFound { parameter, .. } => parameter,
        }
    }
}

/// A parameter carries no type annotation, so no printable type can be derived.
///
/// Every parameter of an extracted function must be annotated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter '{parameter}' of '{function}' has no type annotation")]
pub struct TypeAnnotationError {
    pub function: String,
    pub parameter: String,
}

/*───────────────────────────────────────────────────────────────────────────*/

/// All the ways an operation on a [`ToolRegistry`](crate::ToolRegistry) can fail.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ToolError {
    /// Looked up a function that was never registered.
    #[error("Function '{name}' not found")]
    FunctionNotFound { name: Cow<'static, str> },

    /// Attempted to register a function under a name that is already taken.
    #[error("Tool '{name}' is already registered")]
    AlreadyRegistered { name: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    TypeAnnotation(#[from] TypeAnnotationError),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] JsonError),
}
