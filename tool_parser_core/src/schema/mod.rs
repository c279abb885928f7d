use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// `ToolSchema` – the tool-calling declaration of one function.
/// Serializes to the OpenAI function calling format directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSchema {
    #[serde(rename = "type")]
    pub function_type: &'static str,
    pub function: FunctionDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDetails {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameters {
    #[serde(rename = "type")]
    pub parameters_type: &'static str,
    pub properties: IndexMap<String, Property>,
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
}

impl ToolSchema {
    pub fn new(name: String, description: Option<String>, parameters: Parameters) -> Self {
        Self {
            function_type: "function",
            function: FunctionDetails {
                name,
                description,
                parameters,
            },
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Parameters {
    pub fn new(properties: IndexMap<String, Property>, required: Vec<String>) -> Self {
        Self {
            parameters_type: "object",
            properties,
            required,
        }
    }
}
