use llm_tool_parser::tool;

#[tool]
fn sum((a, b): (i32, i32)) -> i32 {
    a + b
}

fn main() {}
