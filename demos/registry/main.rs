//! Build declarations by hand, without the `#[tool]` attribute.
//!
//! Useful when the described function lives outside Rust (a script, a
//! remote endpoint) and only its signature is known.

use llm_tool_parser::{
    FunctionSignature, Parameter, ToolAnnotations, ToolFunction, ToolRegistry, collect_tools, tool,
};
use tracing_subscriber::EnvFilter;

#[tool(location = "City or place name.")]
/// Return a weather report for **`location`**.
fn weather(location: String, days: Option<u8>) -> String {
    format!("{location}: sunny for {} day(s)", days.unwrap_or(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut registry = ToolRegistry::new();
    registry.register(ToolFunction::new(
        FunctionSignature::new("search")
            .doc("Search the documentation index.")
            .param(Parameter::new("query", "str"))
            .param(Parameter::new("limit", "int").with_default()),
    ))?;
    registry.register_tool_metadata(
        "search",
        ToolAnnotations::new()
            .param("query", "Words to look for.")
            .param("limit", "Maximum number of hits."),
    )?;

    // Link-time registrations: `weather` above.
    for function in collect_tools().iter() {
        registry.register(function.clone())?;
    }

    println!("Registered: {}", registry.names().collect::<Vec<_>>().join(", "));
    println!("{}", serde_json::to_string_pretty(&registry.json()?)?);

    // A bad annotation is reported and leaves the registry unchanged.
    if let Err(err) =
        registry.register_tool_metadata("search", ToolAnnotations::new().required(["page"]))
    {
        tracing::error!(%err, "annotation rejected");
    }

    println!("\n{}", weather("Zürich".into(), Some(3)));
    Ok(())
}
