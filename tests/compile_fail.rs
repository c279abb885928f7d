//! Compile-fail tests for `#[tool]` argument and signature checks.

#[test]
fn compile_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
