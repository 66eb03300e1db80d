//! Integration tests for OpenAiSummarizer using wiremock

use model::report::{
    AuthorCriteria, CommitHistoryCriteria, Criteria, DisplayedScore, RepositoryCriteria,
    RepositoryReport,
};
use serde_json::json;
use summarizer::{OpenAiConfig, OpenAiSummarizer, Summarizer, SummarizerError};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(api_url: &str) -> OpenAiConfig {
    OpenAiConfig {
        api_key: "test-api-key".to_owned(),
        api_url: api_url.to_owned(),
        timeout_seconds: 5,
        ..OpenAiConfig::default()
    }
}

fn create_test_report() -> RepositoryReport {
    RepositoryReport {
        repository: "octocat/Hello-World".to_owned(),
        trust_score: DisplayedScore::Computed("60.00".to_owned()),
        computed_score: 60,
        criteria: Criteria {
            author: AuthorCriteria {
                followers: 100,
                public_repos: 8,
                account_age_years: "13.00".to_owned(),
            },
            repository: RepositoryCriteria {
                age_days: 4700,
                has_description: true,
                has_readme: true,
                has_license: false,
            },
            commit_history: CommitHistoryCriteria {
                total_commits: 3,
                commit_frequency_per_week: "0.00".to_owned(),
            },
        },
        summary: String::new(),
    }
}

#[tokio::test]
async fn test_summarize_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 500,
            "temperature": 0.5
        })))
        .and(body_string_contains("Repository: octocat/Hello-World"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "A small but long-lived demo repository."},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let summary = summarizer
        .summarize(&create_test_report(), None)
        .await
        .unwrap();

    assert_eq!(summary, "A small but long-lived demo repository.");
}

#[tokio::test]
async fn test_configured_context_reaches_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Note that the owner is a verified partner."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let summary = summarizer
        .summarize(
            &create_test_report(),
            Some("Note that the owner is a verified partner."),
        )
        .await
        .unwrap();
    assert_eq!(summary, "ok");
}

#[tokio::test]
async fn test_null_content_becomes_empty_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let summary = summarizer
        .summarize(&create_test_report(), None)
        .await
        .unwrap();
    assert!(summary.is_empty());
}

#[tokio::test]
async fn test_missing_choices_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let err = summarizer
        .summarize(&create_test_report(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_api_errors_are_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}
        })))
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let err = summarizer
        .summarize(&create_test_report(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, SummarizerError::RateLimited(ref m) if m == "You exceeded your current quota"));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let summarizer = OpenAiSummarizer::new(create_test_config(&mock_server.uri())).unwrap();
    let err = summarizer
        .summarize(&create_test_report(), None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("upstream unavailable"));
}
