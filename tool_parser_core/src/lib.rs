#![deny(unsafe_code)]

pub mod annotate;
pub mod docstring;
pub mod error;
pub mod extract;
pub mod models;
pub mod schema;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

pub use annotate::{annotate, validate};
pub use docstring::clean_doc;
pub use error::{ConfigurationError, NameOrigin, ToolError, TypeAnnotationError};
pub use extract::{MISSING_DESCRIPTION, ParameterDescriptor, descriptors, extract};
pub use models::{
    FunctionSignature, Parameter, Reflect, ToolAnnotations, ToolFunction, ToolRegistration,
};
pub use schema::{FunctionDetails, Parameters, Property, ToolSchema};

// Re-exported for the code generated by `#[tool]`
pub use inventory;

/// Side table of tool functions keyed by function name.
///
/// Iteration and [`declarations`](Self::declarations) follow registration order.
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry {
    tools: IndexMap<String, ToolFunction>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, function: ToolFunction) -> Result<&mut Self, ToolError> {
        if self.tools.contains_key(function.name()) {
            return Err(ToolError::AlreadyRegistered {
                name: function.name().to_owned(),
            });
        }
        tracing::debug!(function = function.name(), "registered tool function");
        self.tools.insert(function.name().to_owned(), function);
        Ok(self)
    }

    /// Annotate the registered function `name`.
    ///
    /// On failure the stored function keeps its previous annotations.
    pub fn register_tool_metadata(
        &mut self,
        name: &str,
        annotations: ToolAnnotations,
    ) -> Result<&mut Self, ToolError> {
        let function = self
            .tools
            .get_mut(name)
            .ok_or_else(|| not_found(name))?;
        *function = annotate(function.clone(), annotations)?;
        Ok(self)
    }

    pub fn unregister(&mut self, name: &str) -> Result<ToolFunction, ToolError> {
        let removed = self
            .tools
            .shift_remove(name)
            .ok_or_else(|| not_found(name))?;
        tracing::debug!(function = name, "unregistered tool function");
        Ok(removed)
    }

    pub fn get(&self, name: &str) -> Option<&ToolFunction> {
        self.tools.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tools.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolFunction> + '_ {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schema of the registered function `name`.
    pub fn extract(&self, name: &str) -> Result<ToolSchema, ToolError> {
        let function = self.get(name).ok_or_else(|| not_found(name))?;
        Ok(extract(function)?)
    }

    /// Schemas of every registered function.
    pub fn declarations(&self) -> Result<Vec<ToolSchema>, ToolError> {
        self.tools
            .values()
            .map(|f| extract(f).map_err(ToolError::from))
            .collect()
    }

    /// [`declarations`](Self::declarations) as a JSON array.
    pub fn json(&self) -> Result<Value, ToolError> {
        Ok(serde_json::to_value(self.declarations()?)?)
    }

    /// Gather every function annotated with `#[tool]` in the binary.
    ///
    /// Link order decides the registration order. A name submitted twice
    /// keeps its first registration.
    pub fn collect_tools() -> Self {
        let mut hub = Self::new();

        for reg in inventory::iter::<ToolRegistration> {
            if hub.tools.contains_key(reg.name) {
                tracing::warn!(function = reg.name, "duplicate tool registration ignored");
                continue;
            }
            hub.tools.insert(reg.name.to_owned(), (reg.tool)());
        }

        tracing::debug!(count = hub.len(), "collected tool functions");
        hub
    }
}

fn not_found(name: &str) -> ToolError {
    ToolError::FunctionNotFound {
        name: Cow::Owned(name.to_owned()),
    }
}

inventory::collect!(ToolRegistration);
