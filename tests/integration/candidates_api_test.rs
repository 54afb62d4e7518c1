use super::common;

use common::test_server::{test_settings, TestServer};
use portal::config::MockSettings;
use portal_core::options::{DropdownRow, OPTIONS_ERROR};
use portal_core::{ApiError, AssignmentPayload, CandidatesApi, Field, FormState, OptionsLoader, OptionsState};

#[tokio::test]
async fn test_open_selector_loads_three_levels() {
    let server = TestServer::new().await;
    let api = server.api();
    let mut loader = OptionsLoader::new();
    let mut form = FormState::new();

    let state = loader.open(&api).await;
    let labels: Vec<&str> = state.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["Junior", "Middle", "Senior"]);

    let first = state.options()[0].value.clone();
    form.set(Field::Level, first);
    assert_eq!(form.value(Field::Level), "Junior");
    assert_eq!(form.error(Field::Level), None);
}

#[tokio::test]
async fn test_levels_server_error_shows_error_row() {
    let server = TestServer::with_mock(MockSettings {
        fail_levels: true,
        ..MockSettings::default()
    })
    .await;
    let api = server.api();

    let err = api.fetch_levels().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));

    let mut loader = OptionsLoader::new();
    let rows = loader.open(&api).await.rows();
    assert_eq!(rows, vec![DropdownRow::Error(OPTIONS_ERROR)]);
    assert_eq!(loader.state(), &OptionsState::Failed);
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    let api = portal::adapters::http_client::HttpCandidatesApi::new(
        "http://127.0.0.1:1/levels",
        "http://127.0.0.1:1/assignments",
    );

    assert!(matches!(api.fetch_levels().await, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn test_relay_mode_forwards_to_upstream() {
    let upstream = TestServer::new().await;

    let mut settings = test_settings(MockSettings {
        enabled: false,
        ..MockSettings::default()
    });
    settings.api = upstream.api_settings();
    let relay = TestServer::start(settings).await;
    let api = relay.api();

    assert_eq!(
        api.fetch_levels().await.unwrap(),
        vec!["Junior".to_string(), "Middle".to_string(), "Senior".to_string()]
    );

    let incomplete = AssignmentPayload {
        name: "Test Name".to_string(),
        email: "test@test.io".to_string(),
        assignment_description: "Test".to_string(),
        github_repo_url: "https://test.io".to_string(),
        candidate_level: String::new(),
    };
    let err = api.submit_assignment(&incomplete).await.unwrap_err();
    match err {
        ApiError::Status { status, messages } => {
            assert_eq!(status, 401);
            assert_eq!(
                messages.unwrap(),
                vec![
                    "Description must be at least 10 characters".to_string(),
                    "Level is required".to_string(),
                ]
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
