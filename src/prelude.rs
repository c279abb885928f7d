//! Convenient re-exports for common usage patterns.
//!
//! This prelude module re-exports the most commonly used items from llm-tool-parser,
//! allowing users to import everything they typically need with a single use statement:
//!
//! ```rust
//! use llm_tool_parser::prelude::*;
//! ```

// Core functionality
pub use crate::{annotate, collect_tools, extract, function_declarations};

// Essential types
pub use crate::{
    ConfigurationError, FunctionSignature, Parameter, Reflect, ToolAnnotations, ToolError,
    ToolFunction, ToolRegistry, ToolSchema, TypeAnnotationError,
};

// Macros
#[cfg(feature = "macros")]
pub use crate::tool;

// Commonly used external types
pub use serde_json::{Value, json};
