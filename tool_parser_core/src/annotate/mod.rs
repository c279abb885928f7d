//! Attaching descriptions and a required list to a function.

use crate::error::{ConfigurationError, NameOrigin};
use crate::models::{FunctionSignature, ToolAnnotations, ToolFunction};

/// Attach `annotations` to `function` and hand it back.
///
/// Every required name and every description key must be a parameter of
/// the function, otherwise [`ConfigurationError::ParameterNotFound`] is
/// returned for the first one that is not. A non-empty description override
/// replaces the documentation string. Previous annotations are replaced, so
/// applying the same annotations twice gives the same state.
///
/// ```
/// use tool_parser_core::{annotate, FunctionSignature, Parameter, ToolAnnotations, ToolFunction};
///
/// let f = ToolFunction::new(
///     FunctionSignature::new("f")
///         .param(Parameter::new("a", "int"))
///         .param(Parameter::new("b", "int").with_default()),
/// );
/// let f = annotate(f, ToolAnnotations::new().required(["b"])).unwrap();
/// assert_eq!(f.annotations().required_names, ["b"]);
///
/// let f = ToolFunction::new(FunctionSignature::new("g"));
/// assert!(annotate(f, ToolAnnotations::new().required(["nonexistent"])).is_err());
/// ```
pub fn annotate(
    mut function: ToolFunction,
    annotations: ToolAnnotations,
) -> Result<ToolFunction, ConfigurationError> {
    validate(function.signature(), &annotations)?;

    tracing::debug!(
        function = function.name(),
        required = ?annotations.required_names,
        described = annotations.parameter_descriptions.len(),
        overrides_description = annotations
            .description_override
            .as_deref()
            .is_some_and(|d| !d.is_empty()),
        "annotating tool function"
    );

    function.attach(annotations);
    Ok(function)
}

/// Check every name in `annotations` against the parameters of `signature`.
pub fn validate(
    signature: &FunctionSignature,
    annotations: &ToolAnnotations,
) -> Result<(), ConfigurationError> {
    let required = annotations
        .required_names
        .iter()
        .map(|name| (name, NameOrigin::RequiredParams));
    let described = annotations
        .parameter_descriptions
        .keys()
        .map(|name| (name, NameOrigin::ParameterDescriptions));

    for (name, origin) in required.chain(described) {
        if !signature.has_parameter(name) {
            return Err(ConfigurationError::ParameterNotFound {
                function: signature.name.clone(),
                parameter: name.clone(),
                origin,
            });
        }
    }
    Ok(())
}
