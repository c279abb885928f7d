use llm_tool_parser::tool;

#[tool(required = "a")]
fn f(a: i32) -> i32 {
    a
}

fn main() {}
