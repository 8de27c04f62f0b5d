#[test]
fn rejected_declarations() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
