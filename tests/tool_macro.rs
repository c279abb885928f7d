use llm_tool_parser::{Reflect, collect_tools, function_declarations, tool};
use serde_json::json;

#[tool(
    x = "An integer representing some value.",
    y = "A floating-point number representing another value.",
    z = "A string representing a label (default value: 'default')."
)]
/// This function takes three parameters and returns them as a tuple.
///
/// Parameters:
///     x (i64): An integer representing some value.
///     y (f64): A floating-point number representing another value.
///     z (String, optional): A string representing a label.
fn example_function(x: i64, y: f64, z: Option<String>) -> (i64, f64, String) {
    (x, y, z.unwrap_or_else(|| "default".to_string()))
}

#[tool(required = ["b"])]
/// Adds two values.
fn add_with_override(a: i32, b: Option<i32>) -> i32 {
    a + b.unwrap_or(1)
}

#[tool(description = "X", a = "first")]
/// Original documentation.
pub fn overridden(a: &str, tags: Vec<String>) -> usize {
    a.len() + tags.len()
}

#[tool]
fn undocumented(r#type: u8) -> u8 {
    r#type
}

#[tool(params(description = "Free text."))]
/// Echo.
fn echo(description: String) -> String {
    description
}

#[test]
fn example_function_schema() {
    let schema = ExampleFunctionTool::tool_function().extract().unwrap();

    assert_eq!(
        schema.to_value().unwrap(),
        json!({
            "type": "function",
            "function": {
                "name": "example_function",
                "description": "This function takes three parameters and returns them as a tuple.\n\nParameters:\n    x (i64): An integer representing some value.\n    y (f64): A floating-point number representing another value.\n    z (String, optional): A string representing a label.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "x": { "type": "i64", "description": "An integer representing some value." },
                        "y": { "type": "f64", "description": "A floating-point number representing another value." },
                        "z": { "type": "String", "description": "A string representing a label (default value: 'default')." }
                    },
                    "required": ["x", "y"]
                }
            }
        })
    );

    // The function itself is left untouched.
    assert_eq!(example_function(1, 2.0, None), (1, 2.0, "default".to_string()));
}

#[test]
fn required_override_replaces_default_rule() {
    let schema = AddWithOverrideTool::tool_function().extract().unwrap();
    assert_eq!(schema.function.parameters.required, ["b"]);
    assert_eq!(add_with_override(1, None), 2);
}

#[test]
fn description_override_and_fallback() {
    let schema = OverriddenTool::tool_function().extract().unwrap();
    assert_eq!(schema.function.description.as_deref(), Some("X"));

    let props = &schema.function.parameters.properties;
    assert_eq!(props["a"].property_type, "&str");
    assert_eq!(props["a"].description, "first");
    assert_eq!(props["tags"].property_type, "Vec<String>");
    assert_eq!(props["tags"].description, "None");
    assert_eq!(schema.function.parameters.required, ["a", "tags"]);
}

#[test]
fn raw_identifiers_and_missing_docs() {
    let schema = UndocumentedTool::tool_function().extract().unwrap();
    assert_eq!(schema.function.description, None);
    assert!(schema.function.parameters.properties.contains_key("type"));
    assert_eq!(undocumented(3), 3);
}

#[test]
fn reserved_names_through_params_list() {
    let schema = EchoTool::tool_function().extract().unwrap();
    assert_eq!(
        schema.function.parameters.properties["description"].description,
        "Free text."
    );
    assert_eq!(schema.function.description.as_deref(), Some("Echo."));
}

#[test]
fn extraction_is_repeatable() {
    let f = ExampleFunctionTool::tool_function();
    assert_eq!(f.extract().unwrap(), f.extract().unwrap());
}

#[test]
fn collected_tools_include_every_annotated_function() {
    let tools = collect_tools();
    for name in [
        "example_function",
        "add_with_override",
        "overridden",
        "undocumented",
        "echo",
    ] {
        assert!(tools.get(name).is_some(), "{name} should be registered");
    }

    let declarations = function_declarations().unwrap();
    let add = declarations
        .as_array()
        .unwrap()
        .iter()
        .find(|tool| tool["function"]["name"] == "add_with_override")
        .expect("add_with_override should be declared");
    assert_eq!(add["function"]["parameters"]["required"], json!(["b"]));
}

#[test]
fn collected_tools_can_be_reannotated() {
    let mut tools = collect_tools();
    tools
        .register_tool_metadata(
            "undocumented",
            llm_tool_parser::ToolAnnotations::new()
                .description("Returns its input.")
                .param("type", "Any byte."),
        )
        .unwrap();
    let schema = tools.extract("undocumented").unwrap();
    assert_eq!(schema.function.description.as_deref(), Some("Returns its input."));
    assert_eq!(
        schema.function.parameters.properties["type"].description,
        "Any byte."
    );
}
