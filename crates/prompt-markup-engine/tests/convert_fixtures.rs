use prompt_markup_engine::convert;

#[test]
fn fixture_demo_response() {
    assert_fixture("demo_response");
}

#[test]
fn fixture_edge_cases() {
    assert_fixture("edge_cases");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let html = convert(&md);
    insta::assert_snapshot!(name, html);
}
