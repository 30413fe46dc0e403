//! Integration tests for assistant configuration parsing and validation.

use rstest::rstest;
use std::path::Path;
use tasktalk::config::{AssistantConfig, CompletionPolicy, ConfigError};

#[rstest]
fn missing_keys_take_defaults() {
    let config = AssistantConfig::from_json_str("{}").expect("empty document is valid");
    assert_eq!(config, AssistantConfig::default());
    assert_eq!(config.pending_selection_ttl_secs, 600);
    assert_eq!(config.completion_policy, CompletionPolicy::Delete);
}

#[rstest]
fn every_key_is_read() {
    let config = AssistantConfig::from_json_str(
        r#"{
            "utc_offset_minutes": -300,
            "pending_selection_ttl_secs": 90,
            "completion_policy": "mark_completed",
            "max_listed_tasks": 5
        }"#,
    )
    .expect("document is valid");

    assert_eq!(config.utc_offset_minutes, -300);
    assert_eq!(config.pending_selection_ttl_secs, 90);
    assert_eq!(config.completion_policy, CompletionPolicy::MarkCompleted);
    assert_eq!(config.max_listed_tasks, 5);
    assert_eq!(
        config.offset().expect("offset in range").local_minus_utc(),
        -300 * 60
    );
}

#[rstest]
#[case(r#"{"utc_offset_minutes": 900}"#)]
#[case(r#"{"pending_selection_ttl_secs": 0}"#)]
#[case(r#"{"max_listed_tasks": 0}"#)]
#[case(r#"{"completion_policy": "archive"}"#)]
#[case(r#"{"unknown_key": true}"#)]
#[case("not json")]
fn invalid_documents_are_rejected(#[case] json: &str) {
    assert!(AssistantConfig::from_json_str(json).is_err(), "{json}");
}

#[rstest]
fn presets_are_valid() {
    for config in [
        AssistantConfig::default(),
        AssistantConfig::lenient(),
        AssistantConfig::strict(),
    ] {
        assert!(config.validate().is_ok(), "{config:?}");
    }
    assert_eq!(
        AssistantConfig::lenient().completion_policy,
        CompletionPolicy::MarkCompleted
    );
    assert_eq!(AssistantConfig::strict().max_listed_tasks, 10);
}

#[rstest]
fn unreadable_file_reports_its_path() {
    let error = AssistantConfig::load(Path::new("/nonexistent/tasktalk.json"))
        .expect_err("file does not exist");
    assert!(
        matches!(&error, ConfigError::Read { path, .. } if path == "/nonexistent/tasktalk.json"),
        "{error:?}"
    );
}
