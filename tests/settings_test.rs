use askdoc::application::ports::DistanceMetric;
use askdoc::infrastructure::llm::DEFAULT_PROMPT_TEMPLATE;
use askdoc::presentation::config::{Environment, Settings};

fn defaults() -> Settings {
    Settings::load_from(None).unwrap()
}

#[test]
fn given_no_overrides_when_loading_then_uses_defaults() {
    let settings = defaults();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.chunking.chunk_size, 1000);
    assert_eq!(settings.chunking.chunk_overlap, 0);
    assert_eq!(settings.retrieval.top_k, 4);
    assert_eq!(settings.retrieval.distance_metric, DistanceMetric::Cosine);
    assert_eq!(settings.llm.prompt_template, DEFAULT_PROMPT_TEMPLATE);
    assert!(!settings.scaffold.enabled);
    assert_eq!(settings.max_upload_bytes(), 25 * 1024 * 1024);
}

#[test]
fn given_overlap_not_below_size_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.chunking.chunk_size = 100;
    settings.chunking.chunk_overlap = 100;

    assert!(settings.validate().is_err());
}

#[test]
fn given_zero_upload_limit_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.server.max_upload_size_mb = 0;

    let error = settings.validate().unwrap_err();

    assert!(error.to_string().contains("max_upload_size_mb"));
}

#[test]
fn given_upload_limit_overflowing_bytes_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.server.max_upload_size_mb = usize::MAX / 1024;

    let error = settings.validate().unwrap_err();

    assert!(error.to_string().contains("too large"));
}

#[test]
fn given_zero_chunk_size_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.chunking.chunk_size = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_zero_top_k_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.retrieval.top_k = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn given_template_without_question_when_validating_then_rejects() {
    let mut settings = defaults();
    settings.llm.prompt_template = "Context: {context}".to_string();

    let error = settings.validate().unwrap_err();

    assert!(error.to_string().contains("{question}"));
}

#[test]
fn given_environment_names_when_parsing_then_maps_aliases() {
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
    assert_eq!(
        Environment::try_from(" Dev ".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(Environment::Test.to_string(), "test");
    assert!(Environment::try_from("staging".to_string()).is_err());
}
