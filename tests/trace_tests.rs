use serde_json::{Value, json};
use testforge::trace::store::{ActionTraceStore, TraceError, to_pretty_json};

// =========================================================================
// Helpers
// =========================================================================

fn sample_actions() -> Vec<Value> {
    vec![
        json!({
            "go_to_url": { "url": "https://www.google.com/" },
            "interacted_element": null,
        }),
        json!({
            "input_text": { "index": 0, "text": "automation testing" },
            "interacted_element": {
                "xpath": "html/body/div[1]/form/textarea",
                "tag_name": "textarea",
            },
        }),
    ]
}

// =========================================================================
// Save / load roundtrip
// =========================================================================

#[test]
fn save_then_load_yields_structurally_equal_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ActionTraceStore::new(dir.path().join("results"));

    let actions = sample_actions();
    let path = store.save("GoogleSearchTest", &actions).expect("save trace");

    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("GoogleSearchTest.json"));

    let loaded = ActionTraceStore::load(&path).expect("load trace");
    assert_eq!(loaded, Value::Array(actions));
}

#[test]
fn save_creates_directory_on_demand() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("a").join("b").join("results");
    let store = ActionTraceStore::new(&nested);

    store.save("Case", &sample_actions()).expect("save trace");
    assert!(nested.join("Case.json").exists());
}

#[test]
fn save_overwrites_existing_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ActionTraceStore::new(dir.path());

    let first = vec![json!({"step": 1})];
    let second = vec![json!({"step": 2}), json!({"step": 3})];

    let path = store.save("Case", &first).expect("first save");
    store.save("Case", &second).expect("second save");

    let loaded = ActionTraceStore::load(&path).expect("load");
    assert_eq!(loaded, Value::Array(second));
}

// =========================================================================
// File format
// =========================================================================

#[test]
fn trace_file_is_pretty_printed_with_four_space_indent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ActionTraceStore::new(dir.path());

    let path = store.save("Case", &sample_actions()).expect("save");
    let content = std::fs::read_to_string(&path).expect("read trace file");

    assert!(content.starts_with("["));
    assert!(content.contains("\n    {"), "expected 4-space indentation:\n{content}");
    assert!(content.contains("automation testing"));
}

#[test]
fn pretty_json_uses_four_spaces() {
    let rendered = to_pretty_json(&json!({"a": 1})).expect("pretty json");
    assert_eq!(rendered, "{\n    \"a\": 1\n}");
}

// =========================================================================
// Error surfacing
// =========================================================================

#[test]
fn load_of_malformed_trace_is_a_deserialization_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[ not json").expect("write");

    match ActionTraceStore::load(&path) {
        Err(TraceError::Malformed { .. }) => {}
        other => panic!("expected Malformed error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn load_of_missing_trace_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    match ActionTraceStore::load(&path) {
        Err(TraceError::Io { .. }) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}
