use llm_tool_parser::tool;

#[tool(description = 42)]
fn f(a: i32) -> i32 {
    a
}

fn main() {}
