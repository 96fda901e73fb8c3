// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Haven configuration system.

use haven_config::diagnostic::{ConfigError, suggest_key};
use haven_config::model::HavenConfig;
use haven_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_haven_config() {
    let toml = r#"
[agent]
name = "test-haven"
log_level = "debug"
system_prompt = "Be kind."

[server]
host = "0.0.0.0"
port = 8080

[openai]
api_key = "sk-test-123"
model = "gpt-4o"
max_tokens = 512
timeout_secs = 10

[safety]
extra_keywords = ["no way out"]
despair_threshold = -0.7
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-haven");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.agent.system_prompt, "Be kind.");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test-123"));
    assert_eq!(config.openai.model, "gpt-4o");
    assert_eq!(config.openai.max_tokens, 512);
    assert_eq!(config.openai.timeout_secs, 10);
    assert_eq!(config.safety.extra_keywords, vec!["no way out"]);
    assert_eq!(config.safety.despair_threshold, -0.7);
}

/// Unknown field in [openai] section produces an UnknownField error.
#[test]
fn unknown_field_in_openai_produces_error() {
    let toml = r#"
[openai]
modle = "gpt-4o"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("modle"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "haven");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.openai.max_tokens, 256);
    assert_eq!(config.openai.timeout_secs, 30);
    assert!(config.safety.extra_keywords.is_empty());
    assert_eq!(config.safety.despair_threshold, -0.85);
}

/// Env-style dotted key override wins over the TOML value.
#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    let config: HavenConfig = Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "envtest"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.agent.name, "envtest");
}

/// HAVEN_OPENAI_MAX_TOKENS must map to openai.max_tokens, not openai.max.tokens.
#[test]
fn dotted_override_sets_max_tokens() {
    use figment::{Figment, providers::Serialized};

    let config: HavenConfig = Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(("openai.max_tokens", 64u32))
        .extract()
        .expect("should set max_tokens via dot notation");

    assert_eq!(config.openai.max_tokens, 64);
}

/// OPENAI_API_KEY maps to openai.api_key and toggles AI replies on.
#[test]
#[serial_test::serial]
fn openai_api_key_env_var_maps_to_api_key() {
    // Env mutation is process-global; the serial attribute keeps other tests
    // from observing it.
    unsafe { std::env::set_var("OPENAI_API_KEY", "sk-env-test") };
    let config = haven_config::load_config().expect("defaults plus env should load");
    unsafe { std::env::remove_var("OPENAI_API_KEY") };

    assert_eq!(config.openai.api_key.as_deref(), Some("sk-env-test"));
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: HavenConfig = Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(Toml::file("/nonexistent/path/haven.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    // Should just get defaults
    assert_eq!(config.agent.name, "haven");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

// ============================================================================
// Diagnostic tests
// ============================================================================

/// Unknown key "modle" in [openai] produces suggestion "did you mean `model`?"
#[test]
fn diagnostic_modle_suggests_model() {
    let valid_keys = &["api_key", "model", "max_tokens", "timeout_secs"];
    let suggestion = suggest_key("modle", valid_keys);
    assert_eq!(suggestion, Some("model".to_string()));
}

/// Unknown key "despair_treshold" suggests "despair_threshold".
#[test]
fn diagnostic_despair_treshold_suggests_threshold() {
    let valid_keys = &["extra_keywords", "despair_threshold"];
    let suggestion = suggest_key("despair_treshold", valid_keys);
    assert_eq!(suggestion, Some("despair_threshold".to_string()));
}

/// Unknown key "zzzzzz" with no close match does NOT produce a suggestion.
#[test]
fn diagnostic_no_suggestion_for_distant_typo() {
    let valid_keys = &["name", "log_level", "system_prompt"];
    let suggestion = suggest_key("zzzzzz", valid_keys);
    assert!(suggestion.is_none(), "should not suggest for distant typo");
}

/// Error output from load_and_validate_str includes the unknown key name.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "naem"
                && suggestion.as_deref() == Some("name")
                && valid_keys.contains("name")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'naem' with suggestion 'name', got: {errors:?}"
    );
}

/// Error output includes the list of valid keys for the section.
#[test]
fn diagnostic_error_includes_valid_keys() {
    let toml = r#"
[openai]
modle = "gpt-4o"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_valid_keys = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { valid_keys, .. } if {
            valid_keys.contains("model")
                && valid_keys.contains("max_tokens")
                && valid_keys.contains("timeout_secs")
        })
    });
    assert!(
        has_valid_keys,
        "error should list valid keys for [openai] section"
    );
}

/// Invalid type (string where number expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[openai]
max_tokens = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("max_tokens"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "modle".to_string(),
        suggestion: Some("model".to_string()),
        valid_keys: "api_key, model, max_tokens, timeout_secs".to_string(),
        span: None,
        src: None,
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `model`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "modle".to_string(),
        suggestion: Some("model".to_string()),
        valid_keys: "api_key, model, max_tokens, timeout_secs".to_string(),
        span: None,
        src: None,
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(!buf.is_empty(), "rendered report should not be empty");
    assert!(buf.contains("modle"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[agent]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.agent.name, "test");
}

/// Validation catches an out-of-range despair threshold.
#[test]
fn validation_catches_positive_despair_threshold() {
    let toml = r#"
[safety]
despair_threshold = 0.5
"#;

    let errors = load_and_validate_str(toml).expect_err("positive threshold should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("despair_threshold"))
    });
    assert!(
        has_validation_error,
        "should have validation error for positive threshold"
    );
}
