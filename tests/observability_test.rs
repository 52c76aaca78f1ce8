use askdoc::infrastructure::observability::{TracingConfig, sanitize_prompt};
use askdoc::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_unchanged() {
    let question = "What color is the sky?";
    assert_eq!(sanitize_prompt(question), question);
}

#[test]
fn given_long_question_when_sanitizing_then_truncates_with_length() {
    let question = "é".repeat(150);
    let result = sanitize_prompt(&question);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_every_pasted_key_when_sanitizing_then_redacts_all_of_them() {
    let result = sanitize_prompt("is sk-first valid? what about sk-second?");
    assert!(!result.contains("first"));
    assert!(!result.contains("second"));
    assert_eq!(result.matches("sk-[REDACTED]").count(), 2);
}

#[test]
fn given_prefix_inside_a_word_when_sanitizing_then_leaves_it_alone() {
    let question = "How does a task-based scheduler work?";
    assert_eq!(sanitize_prompt(question), question);
}

#[test]
fn given_query_string_secrets_when_sanitizing_then_redacts_values() {
    let result = sanitize_prompt("call /x?api_key=secret123&password=hunter2");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(result.contains("password=[REDACTED]"));
    assert!(!result.contains("secret123"));
    assert!(!result.contains("hunter2"));
}

#[test]
fn given_logging_settings_when_building_tracing_config_then_copies_them() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json_format: true,
    };

    let config = TracingConfig::new(Environment::Prod, &logging);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn");
}
