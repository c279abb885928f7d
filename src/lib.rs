//! Describe Rust functions as LLM tool-calling declarations.
//!
//! A function is described by a [`FunctionSignature`], annotated with
//! [`annotate`] and turned into the `{"type": "function", "function": {..}}`
//! schema with [`extract`]. The [`tool`] attribute does the first two steps
//! at compile time from the function's own declaration:
//!
//! ```rust
//! use llm_tool_parser::prelude::*;
//!
//! /// Scale a value.
//! #[tool(factor = "Multiplier applied to the value.")]
//! fn scale(value: f64, factor: Option<f64>) -> f64 {
//!     value * factor.unwrap_or(1.0)
//! }
//!
//! fn main() {
//!     let schema = ScaleTool::tool_function().extract().unwrap();
//!     assert_eq!(schema.function.parameters.required, ["value"]);
//!     assert_eq!(schema.function.parameters.properties["factor"].property_type, "f64");
//! }
//! ```

#![deny(unsafe_code)]

pub mod prelude;

pub use tool_parser_core::{
    ConfigurationError, FunctionDetails, FunctionSignature, MISSING_DESCRIPTION, NameOrigin,
    Parameter, ParameterDescriptor, Parameters, Property, Reflect, ToolAnnotations, ToolError,
    ToolFunction, ToolRegistration, ToolRegistry, ToolSchema, TypeAnnotationError, annotate,
    clean_doc, descriptors, extract, inventory, validate,
};

#[cfg(feature = "macros")]
pub use tool_parser_macros::tool;

use serde_json::Value;

/// Registry of every `#[tool]` function linked into the binary.
pub fn collect_tools() -> ToolRegistry {
    ToolRegistry::collect_tools()
}

/// Schemas of every `#[tool]` function, as a JSON array.
pub fn function_declarations() -> Result<Value, ToolError> {
    collect_tools().json()
}
