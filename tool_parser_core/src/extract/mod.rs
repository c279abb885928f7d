//! Building the tool schema of a function.

use indexmap::IndexMap;

use crate::error::TypeAnnotationError;
use crate::models::{Parameter, ToolAnnotations, ToolFunction};
use crate::schema::{Parameters, Property, ToolSchema};

/// Description used for parameters that were never described.
pub const MISSING_DESCRIPTION: &str = "None";

/// A parameter as it appears in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
    pub description: String,
    pub required: bool,
}

/// Describe every parameter of `function` in declaration order.
///
/// Fails on the first parameter without a type annotation.
pub fn descriptors(
    function: &ToolFunction,
) -> Result<Vec<ParameterDescriptor>, TypeAnnotationError> {
    let annotations = function.annotations();
    function
        .signature()
        .parameters
        .iter()
        .map(|parameter| descriptor(function.name(), parameter, annotations))
        .collect()
}

fn descriptor(
    function: &str,
    parameter: &Parameter,
    annotations: &ToolAnnotations,
) -> Result<ParameterDescriptor, TypeAnnotationError> {
    let type_name = parameter
        .annotation
        .clone()
        .ok_or_else(|| TypeAnnotationError {
            function: function.to_owned(),
            parameter: parameter.name.clone(),
        })?;

    let description = annotations
        .parameter_description(&parameter.name)
        .unwrap_or(MISSING_DESCRIPTION)
        .to_owned();

    let required = if annotations.required_names.is_empty() {
        !parameter.has_default
    } else {
        annotations.required_names.contains(&parameter.name)
    };

    tracing::trace!(
        function,
        parameter = %parameter.name,
        type_name = %type_name,
        required,
        "described parameter"
    );

    Ok(ParameterDescriptor {
        name: parameter.name.clone(),
        type_name,
        description,
        required,
    })
}

/// Build the tool-calling schema of `function`.
///
/// Works on functions that were never annotated: the description is the
/// documentation string, parameter descriptions default to `"None"` and the
/// required list holds the parameters without a default value. A non-empty
/// required list attached by [`annotate`](crate::annotate) is used verbatim
/// instead.
///
/// ```
/// use tool_parser_core::{extract, FunctionSignature, Parameter, ToolFunction};
///
/// let f = ToolFunction::new(
///     FunctionSignature::new("f")
///         .param(Parameter::new("a", "int"))
///         .param(Parameter::new("b", "int").with_default()),
/// );
/// let schema = extract(&f).unwrap();
/// assert_eq!(schema.function.parameters.required, ["a"]);
/// ```
pub fn extract(function: &ToolFunction) -> Result<ToolSchema, TypeAnnotationError> {
    let descriptors = descriptors(function)?;
    let annotations = function.annotations();

    let required = if annotations.required_names.is_empty() {
        descriptors
            .iter()
            .filter(|d| d.required)
            .map(|d| d.name.clone())
            .collect()
    } else {
        for skipped in function
            .signature()
            .parameters
            .iter()
            .filter(|p| !p.has_default && !annotations.required_names.contains(&p.name))
        {
            tracing::warn!(
                function = function.name(),
                parameter = %skipped.name,
                "required list override leaves a parameter without a default unrequired"
            );
        }
        annotations.required_names.clone()
    };

    let properties: IndexMap<String, Property> = descriptors
        .into_iter()
        .map(|d| {
            (
                d.name,
                Property {
                    property_type: d.type_name,
                    description: d.description,
                },
            )
        })
        .collect();

    Ok(ToolSchema::new(
        function.name().to_owned(),
        function.doc().map(str::to_owned),
        Parameters::new(properties, required),
    ))
}
