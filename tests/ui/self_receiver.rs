use llm_tool_parser::tool;

#[tool]
fn count(&self) -> usize {
    0
}

fn main() {}
