//! Tests for CLI output formatting.
//!
//! - JSON output with --json flag
//! - Pretty-print output as default

use modrinth::PrettyPrint;
use serde_json::{json, Value};

fn make_test_project() -> Value {
    json!({
        "id": "AANobbMI",
        "slug": "sodium",
        "title": "Sodium",
        "project_type": "mod",
        "downloads": 45000000,
        "followers": 450000,
        "client_side": "required",
        "server_side": "unsupported",
        "license": { "id": "LGPL-3.0-only", "name": "GNU LGPLv3", "url": null },
        "loaders": ["fabric", "quilt"],
        "donation_urls": [{ "id": "patreon", "url": "https://example.com" }]
    })
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_preserves_all_fields() {
    let project = make_test_project();
    let json_output = serde_json::to_string_pretty(&project).unwrap();

    let parsed: Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed, project);
}

// ============================================================================
// Pretty Print Tests
// ============================================================================

#[test]
fn test_pretty_print_starts_with_title() {
    let output = make_test_project().pretty_print();
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("Sodium"));
    assert!(lines.next().unwrap().starts_with('─'));
}

#[test]
fn test_pretty_print_is_not_json() {
    let output = make_test_project().pretty_print();
    assert!(!output.trim_start().starts_with('{'));
    assert!(serde_json::from_str::<Value>(&output).is_err());
}

#[test]
fn test_pretty_print_includes_key_fields() {
    let output = make_test_project().pretty_print();

    for expected in ["AANobbMI", "sodium", "45000000", "required", "LGPL-3.0-only", "fabric, quilt"] {
        assert!(output.contains(expected), "missing {expected} in:\n{output}");
    }
}

#[test]
fn test_pretty_print_skips_nested_objects() {
    let output = make_test_project().pretty_print();
    assert!(!output.contains("patreon"));
    assert!(!output.contains("donation_urls"));
}

#[test]
fn test_pretty_print_falls_back_to_slug() {
    let output = json!({ "slug": "untitled-mod" }).pretty_print();
    assert!(output.starts_with("untitled-mod"));
}
