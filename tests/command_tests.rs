use objutils::commands::{
    display_version, execute_demo, execute_keys, execute_max, execute_merge, execute_pick,
    execute_shorten, execute_sort_json, execute_sort_map, execute_sort_strings, execute_values,
    validate_args, PickArgs, SortJsonArgs,
};
use objutils::pairs::ScanMode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Run a command against an in-memory buffer and parse its JSON output
fn run_json<F>(command: F) -> Value
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<()>,
{
    let mut buf: Vec<u8> = Vec::new();
    command(&mut buf as &mut dyn Write).unwrap();
    serde_json::from_slice(&buf).unwrap()
}

fn run_text<F>(command: F) -> String
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<()>,
{
    let mut buf: Vec<u8> = Vec::new();
    command(&mut buf as &mut dyn Write).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_shorten_command() {
    let out = run_json(|w| {
        execute_shorten(
            w,
            r#"{"keyOne":1,"keyTwo":2,"keep":3}"#,
            r#"{"keyOne":"key","keyTwo":"keyT"}"#,
        )
    });
    assert_eq!(out, json!({"key": 1, "keyT": 2, "keep": 3}));
}

#[test]
fn test_shorten_command_bad_mapping() {
    let mut buf: Vec<u8> = Vec::new();
    assert!(execute_shorten(&mut buf, r#"{"a":1}"#, r#"{"a":5}"#).is_err());
    assert!(buf.is_empty());
}

#[test]
fn test_max_command() {
    assert_eq!(run_json(|w| execute_max(w, r#"{"a":10,"b":null,"c":5}"#)), json!(10.0));
    assert_eq!(run_json(|w| execute_max(w, "{}")), Value::Null);
}

#[test]
fn test_max_command_non_numeric() {
    let mut buf: Vec<u8> = Vec::new();
    let err = execute_max(&mut buf, r#"{"a":1,"b":"x"}"#).unwrap_err();

    assert!(format!("{:#}", err).contains("must be numeric"));
}

#[test]
fn test_keys_and_values_commands() {
    assert_eq!(
        run_json(|w| execute_keys(w, r#"{"c":3,"a":1,"b":2}"#)),
        json!(["a", "b", "c"])
    );
    assert_eq!(
        run_json(|w| execute_values(w, r#"{"c":3,"a":1,"b":2}"#)),
        json!([1, 2, 3])
    );
}

#[test]
fn test_merge_command() {
    let inputs = vec![r#"{"a":1,"b":2}"#.to_string(), r#"{"b":3,"c":4}"#.to_string()];

    assert_eq!(
        run_json(|w| execute_merge(w, &inputs)),
        json!({"a": 1, "b": 3, "c": 4})
    );
}

#[test]
fn test_merge_command_reports_bad_object() {
    let inputs = vec!["{}".to_string(), "[]".to_string()];
    let mut buf: Vec<u8> = Vec::new();
    let err = execute_merge(&mut buf, &inputs).unwrap_err();

    assert!(err.to_string().contains("#2"));
}

#[test]
fn test_pick_command() {
    let args = PickArgs {
        input: r#"{"a":1,"b":2,"c":3}"#.to_string(),
        keys: vec!["c".to_string(), "z".to_string(), "a".to_string()],
    };

    assert_eq!(run_json(|w| execute_pick(w, &args)), json!([3, 1]));
}

#[test]
fn test_sort_strings_command() {
    let items: Vec<String> = ["b", "c", "e", "d", "t", "a", "b", "t"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(
        run_json(|w| execute_sort_strings(w, items)),
        json!(["a", "b", "b", "c", "d", "e", "t", "t"])
    );
}

#[test]
fn test_sort_map_command_orders_keys() {
    let text = run_text(|w| execute_sort_map(w, r#"{"b":1,"d":2,"a":6,"c":5,"e":5}"#));
    let positions: Vec<usize> = ["\"a\"", "\"b\"", "\"c\"", "\"d\"", "\"e\""]
        .iter()
        .map(|k| text.find(*k).unwrap())
        .collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_sort_json_inline() {
    let args = SortJsonArgs {
        text: Some(r#"{"b":1,"a":6,"a":2}"#.to_string()),
        ..Default::default()
    };

    assert_eq!(
        run_json(|w| execute_sort_json(w, &args)),
        json!([
            {"key": "a", "value": "6"},
            {"key": "a", "value": "2"},
            {"key": "b", "value": "1"}
        ])
    );
}

#[test]
fn test_sort_json_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"d":4,"d":2,"c":5}}"#).unwrap();

    let args = SortJsonArgs {
        file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert_eq!(
        run_json(|w| execute_sort_json(w, &args)),
        json!([
            {"key": "c", "value": "5"},
            {"key": "d", "value": "4"},
            {"key": "d", "value": "2"}
        ])
    );
}

#[test]
fn test_sort_json_strict_rejects_malformed() {
    let args = SortJsonArgs {
        text: Some(r#"{"a":1,"#.to_string()),
        mode: ScanMode::Strict,
        ..Default::default()
    };
    let mut buf: Vec<u8> = Vec::new();

    assert!(execute_sort_json(&mut buf, &args).is_err());
}

#[test]
fn test_sort_json_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = SortJsonArgs {
        file: Some(temp_dir.path().join("missing.json")),
        ..Default::default()
    };
    let mut buf: Vec<u8> = Vec::new();

    assert!(execute_sort_json(&mut buf, &args).is_err());
}

#[test]
fn test_validate_args_requires_one_source() {
    assert!(validate_args(&SortJsonArgs::default()).is_err());

    let both = SortJsonArgs {
        text: Some("{}".to_string()),
        file: Some(PathBuf::from("in.json")),
        ..Default::default()
    };
    assert!(validate_args(&both).is_err());

    let empty_path = SortJsonArgs {
        file: Some(PathBuf::new()),
        ..Default::default()
    };
    assert!(validate_args(&empty_path).is_err());

    let inline = SortJsonArgs {
        text: Some("{}".to_string()),
        ..Default::default()
    };
    assert!(validate_args(&inline).is_ok());
}

#[test]
fn test_demo_runs_every_operation() {
    let text = run_text(execute_demo);

    for label in [
        "Shortened Map:",
        "Shortened Record:",
        "Max Value: 3.0",
        "All Keys: [\"a\",\"b\",\"c\"]",
        "Combined Map:",
        "Values by Key: [1,3]",
        "Sorted with Duplicates Preserved: [\"a\",\"b\",\"b\",\"c\",\"d\",\"e\",\"t\",\"t\"]",
        "Map Sorted by Key: [\"a\",\"b\",\"c\"]",
        "Sorted JSON with duplicate keys:",
    ] {
        assert!(text.contains(label), "missing {:?} in:\n{}", label, text);
    }
}

#[test]
fn test_version_output() {
    let text = run_text(|w| display_version(w).map_err(Into::into));
    assert!(text.starts_with("objutils v"));
}
