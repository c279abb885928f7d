use llm_tool_parser::tool;

#[tool(a = "first", c = "missing")]
fn f(a: i32) -> i32 {
    a
}

fn main() {}
