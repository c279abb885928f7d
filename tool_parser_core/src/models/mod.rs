//! Core data models for the tool-parser library
//!
//! A Rust function cannot be inspected at runtime, so its signature is
//! described by a [`FunctionSignature`] (hand-built or emitted by the
//! `#[tool]` macro) and its attached metadata lives next to it in a
//! [`ToolAnnotations`] record. [`ToolFunction`] pairs the two.

use indexmap::IndexMap;

use crate::docstring::clean_doc;
use crate::error::{ConfigurationError, TypeAnnotationError};
use crate::schema::ToolSchema;

/// One declared parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name as declared
    pub name: String,
    /// Printable type annotation, `None` when the parameter is unannotated
    pub annotation: Option<String>,
    /// Whether the declaration carries a default value
    pub has_default: bool,
}

impl Parameter {
    /// An annotated parameter without a default value.
    pub fn new(name: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: Some(annotation.into()),
            has_default: false,
        }
    }

    /// A parameter with no type annotation. Extraction fails on it.
    pub fn unannotated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            has_default: false,
        }
    }

    /// Mark the parameter as carrying a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// Name, documentation and ordered parameters of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub doc: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            parameters: Vec::new(),
        }
    }

    /// Set the documentation string. It is normalized with [`clean_doc`].
    #[must_use]
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = clean_doc(doc);
        self
    }

    /// Append a parameter. Declaration order is kept.
    ///
    /// Names are unique: a parameter named like an existing one replaces it
    /// in its original position.
    #[must_use]
    pub fn param(mut self, parameter: Parameter) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }
}

/// Metadata attached to a function by the annotator.
///
/// Also serves as the argument list of [`annotate`](crate::annotate): an
/// optional description override, an optional required-parameter list and
/// a description per parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolAnnotations {
    /// Replaces the documentation string when present and non-empty
    pub description_override: Option<String>,
    /// When non-empty, the exact `required` list of the schema
    pub required_names: Vec<String>,
    /// Parameter name → human-readable description
    pub parameter_descriptions: IndexMap<String, String>,
}

impl ToolAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description_override = Some(description.into());
        self
    }

    /// Override the required list. This replaces the default-value rule for
    /// every parameter, it is not merged with it.
    #[must_use]
    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Describe one parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameter_descriptions
            .insert(name.into(), description.into());
        self
    }

    /// Look up the description attached to `name`.
    pub fn parameter_description(&self, name: &str) -> Option<&str> {
        self.parameter_descriptions.get(name).map(String::as_str)
    }
}

/// A function signature together with its attached metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFunction {
    signature: FunctionSignature,
    annotations: ToolAnnotations,
}

impl ToolFunction {
    /// A function that has not been annotated yet.
    pub fn new(signature: FunctionSignature) -> Self {
        Self {
            signature,
            annotations: ToolAnnotations::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Current documentation string, reflecting any override.
    pub fn doc(&self) -> Option<&str> {
        self.signature.doc.as_deref()
    }

    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    pub fn annotations(&self) -> &ToolAnnotations {
        &self.annotations
    }

    /// See [`annotate`](crate::annotate).
    pub fn annotate(self, annotations: ToolAnnotations) -> Result<Self, ConfigurationError> {
        crate::annotate(self, annotations)
    }

    /// See [`extract`](crate::extract).
    pub fn extract(&self) -> Result<ToolSchema, TypeAnnotationError> {
        crate::extract(self)
    }

    /// Store annotations that have already been checked against the signature.
    ///
    /// A non-empty description override is cleaned like a docstring, so an
    /// override of only whitespace leaves an empty documentation string.
    pub(crate) fn attach(&mut self, annotations: ToolAnnotations) {
        if let Some(description) = annotations
            .description_override
            .as_deref()
            .filter(|d| !d.is_empty())
        {
            self.signature.doc = Some(clean_doc(description).unwrap_or_default());
        }
        self.annotations = annotations;
    }

    /// Build a function from annotations validated at compile time by `#[tool]`.
    #[doc(hidden)]
    pub fn __from_validated(signature: FunctionSignature, annotations: ToolAnnotations) -> Self {
        let mut function = Self::new(signature);
        function.attach(annotations);
        function
    }
}

/// Implemented by the companion type `#[tool]` emits for each function.
pub trait Reflect {
    /// The annotated function described by this type.
    fn tool_function() -> ToolFunction;
}

/// Link-time registration submitted by `#[tool]`.
pub struct ToolRegistration {
    /// Function name
    pub name: &'static str,
    /// Builds the annotated function
    pub tool: fn() -> ToolFunction,
}

impl ToolRegistration {
    pub const fn new(name: &'static str, tool: fn() -> ToolFunction) -> Self {
        Self { name, tool }
    }
}
