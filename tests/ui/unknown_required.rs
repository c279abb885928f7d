use llm_tool_parser::tool;

#[tool(required = ["nonexistent"])]
fn f(a: i32, b: Option<i32>) -> i32 {
    a + b.unwrap_or(1)
}

fn main() {}
