//! Configuration loading: TOML files on disk, graceful degradation, and
//! the effect of custom attribute sets on validation.

use std::io::Write;

use jsx_text_lint::checkers::default_checkers;
use jsx_text_lint::config::{Args, Config, ConfigFile, OutputFormat};
use jsx_text_lint::parser::parse_document;
use jsx_text_lint::validation::{AttributeDisposition, Validator};

fn args_with_config(config: Option<std::path::PathBuf>) -> Args {
    Args {
        paths: vec![],
        config,
        format: OutputFormat::Text,
        log_level: "info".to_string(),
        checker_timeout_ms: 5000,
    }
}

#[test]
fn test_load_config_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        r#"
[attributes]
target = ["label", "tooltip"]
ignore = ["data-*", "className"]

[style]
forbidden-phrases = ["click here", "please note"]
"#
    )
    .expect("write config");

    let loaded = ConfigFile::load(file.path()).expect("load config");
    assert_eq!(
        loaded.style.forbidden_phrases,
        vec!["click here", "please note"]
    );

    let policy = loaded.attribute_policy();
    assert_eq!(policy.classify("label"), AttributeDisposition::Checked);
    assert_eq!(policy.classify("title"), AttributeDisposition::NotChecked);
    assert_eq!(policy.classify("data-role"), AttributeDisposition::Ignored);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "[attributes\ntarget = not toml").expect("write config");

    let result = ConfigFile::load(file.path());
    assert!(result.is_err());
}

#[test]
fn test_missing_explicit_config_degrades_to_defaults() {
    let args = args_with_config(Some("/nonexistent/jsx-text-lint.toml".into()));
    let config = Config::from_args(args).expect("config should not fail");
    assert_eq!(
        config.policy.classify("title"),
        AttributeDisposition::Checked
    );
}

#[tokio::test]
async fn test_custom_target_set_drives_validation() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "[attributes]\ntarget = [\"data-caption\"]\nignore = []").expect("write config");

    let loaded = ConfigFile::load(file.path()).expect("load config");
    let validator = Validator::new(loaded.attribute_policy(), default_checkers(Vec::new()));

    // `title` is no longer targeted; `data-caption` now is
    let doc = parse_document(
        "test.tsx",
        r#"<img title="Wrnog one" data-caption="Plsae two" />"#,
    );
    let diagnostics = validator.validate(&doc).await;

    assert_eq!(diagnostics.len(), 1, "unexpected: {diagnostics:?}");
    assert!(diagnostics[0].message.contains("Plsae"));
}

#[tokio::test]
async fn test_forbidden_phrases_reach_the_style_checker() {
    let validator = Validator::new(
        jsx_text_lint::AttributePolicy::with_defaults(),
        default_checkers(vec!["click here".to_string()]),
    );
    let doc = parse_document("test.tsx", "<p>Click here to continue</p>");
    let diagnostics = validator.validate(&doc).await;

    assert!(diagnostics
        .iter()
        .any(|d| d.rule_id == "style/forbidden-phrase"));
}
