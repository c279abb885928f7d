//! Print the tool declaration of an annotated function.
//!
//! ```text
//! RUST_LOG=debug cargo run -p demos --bin basic
//! ```

use llm_tool_parser::{Reflect, tool};
use tracing_subscriber::EnvFilter;

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
///     z (String, optional): A string representing a label (default value: 'default').
///
/// Returns:
///     tuple: A tuple containing the input parameters.
fn example_function(x: i64, y: f64, z: Option<String>) -> (i64, f64, String) {
    (x, y, z.unwrap_or_else(|| "default".into()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let info = ExampleFunctionTool::tool_function().extract()?;
    println!("{}", serde_json::to_string_pretty(&info)?);

    let (x, y, z) = example_function(1, 2.5, None);
    println!("\nexample_function(1, 2.5, None) → ({x}, {y}, {z:?})");

    Ok(())
}
