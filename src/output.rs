//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde_json::{Map, Value};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Fields shown first, in this order, when present.
const LEADING_FIELDS: &[&str] = &[
    "id",
    "slug",
    "project_type",
    "description",
    "downloads",
    "followers",
    "client_side",
    "server_side",
    "license",
    "categories",
    "loaders",
    "game_versions",
];

/// Fields tried in order for the header line.
const HEADER_FIELDS: &[&str] = &["title", "slug", "id", "error"];

/// Trait for human-readable key-value output.
///
/// Implemented for the JSON values returned by the client to provide
/// formatted output suitable for terminal display when `--json` is not
/// specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// One `field | value` row.
#[derive(Debug, Tabled)]
pub struct FieldRow {
    pub field: String,
    pub value: String,
}

impl PrettyPrint for Value {
    fn pretty_print(&self) -> String {
        let Value::Object(map) = self else {
            return render_scalar(self).unwrap_or_else(|| self.to_string());
        };

        let header = HEADER_FIELDS
            .iter()
            .find_map(|key| map.get(*key).and_then(render_scalar))
            .unwrap_or_else(|| "(untitled)".to_string());
        let divider = "─".repeat(header.chars().count().max(30));

        let rows = field_rows(map);
        if rows.is_empty() {
            return format!("{header}\n{divider}");
        }

        let mut table = Table::new(rows);
        table.with(Style::blank());
        format!("{header}\n{divider}\n{table}")
    }
}

/// Collect displayable top-level fields: known fields first, then the rest
/// alphabetically. Fields without a scalar rendering are skipped.
pub fn field_rows(map: &Map<String, Value>) -> Vec<FieldRow> {
    let mut rest: Vec<&String> = map
        .keys()
        .filter(|k| k.as_str() != "title" && !LEADING_FIELDS.contains(&k.as_str()))
        .collect();
    rest.sort();

    LEADING_FIELDS
        .iter()
        .copied()
        .chain(rest.into_iter().map(String::as_str))
        .filter_map(|key| {
            let value = render_field(map.get(key)?)?;
            Some(FieldRow {
                field: key.to_string(),
                value,
            })
        })
        .collect()
}

fn render_field(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(render_scalar).collect();
            (!joined.is_empty()).then(|| joined.join(", "))
        }
        // License objects carry their SPDX id
        Value::Object(obj) => obj.get("id").and_then(render_scalar),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_project() -> Value {
        json!({
            "id": "AANobbMI",
            "slug": "sodium",
            "title": "Sodium",
            "project_type": "mod",
            "downloads": 1000,
            "license": { "id": "LGPL-3.0-only", "name": "GNU LGPLv3" },
            "categories": ["optimization"],
            "game_versions": ["1.20.1", "1.20.2"],
            "gallery": [{ "url": "https://cdn.example/1.png" }],
            "body": "long text",
            "approved": null
        })
    }

    #[test]
    fn test_project_pretty_print_format() {
        let output = sample_project().pretty_print();
        assert!(output.starts_with("Sodium\n"));
        assert!(output.contains("AANobbMI"));
        assert!(output.contains("LGPL-3.0-only"));
        assert!(output.contains("1.20.1, 1.20.2"));
        assert!(!output.contains("cdn.example"));
    }

    #[test]
    fn test_field_order() {
        let project = sample_project();
        let rows = field_rows(project.as_object().unwrap());
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();

        assert_eq!(
            fields,
            vec![
                "id",
                "slug",
                "project_type",
                "downloads",
                "license",
                "categories",
                "game_versions",
                "body"
            ]
        );
    }

    #[test]
    fn test_error_payload_header() {
        let output = json!({ "error": "not_found", "description": "the requested route does not exist" })
            .pretty_print();
        assert!(output.starts_with("not_found\n"));
        assert!(output.contains("the requested route does not exist"));
    }

    #[test]
    fn test_non_object_value() {
        assert_eq!(json!("plain").pretty_print(), "plain");
        assert_eq!(json!([1, 2]).pretty_print(), "[1,2]");
    }
}
