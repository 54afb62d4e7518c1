use super::common;

use common::test_server::TestServer;
use portal::adapters::file_store::FileStore;
use portal::adapters::http_client::HttpCandidatesApi;
use portal_core::{
    read_confirmation, AssignmentPayload, CandidatesApi, ConfirmationView, Field, FormState,
    FormValues, KeyValueStore, OptionsLoader, SubmissionOrchestrator, SubmissionOutcome,
    FORM_DATA_KEY, GENERIC_SUBMIT_ERROR,
};
use std::cell::Cell;
use tempfile::TempDir;

#[tokio::test]
async fn test_submit_persists_record_and_navigates() {
    let server = TestServer::new().await;
    let api = server.api();
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("portal-data.json"));

    let mut form = FormState::new();
    form.set(Field::Name, "Test Name");
    form.set(Field::Email, "test@test.io");
    form.set(Field::Description, "Test description");
    form.set(Field::RepoUrl, "https://test.io");
    assert!(!form.can_submit());

    let mut loader = OptionsLoader::new();
    let first = loader.open(&api).await.options()[0].value.clone();
    form.set(Field::Level, first);
    assert!(form.can_submit());

    let values = form.begin_submit().unwrap();
    let navigated = Cell::new(false);
    let navigator = || navigated.set(true);
    let outcome = SubmissionOrchestrator::new(&api, &store, &navigator)
        .submit(&values)
        .await;
    form.finish_submit(&outcome);

    assert!(outcome.is_accepted());
    assert!(navigated.get());
    assert!(form.submit_errors().is_empty());

    let stored = FileStore::new(store.path()).get(FORM_DATA_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Name": "Test Name",
            "Email": "test@test.io",
            "Description": "Test description",
            "GitHub Repo URL": "https://test.io",
            "Level": "Junior",
        })
    );

    let view = read_confirmation(&store);
    assert_eq!(
        view.lines(),
        vec![
            "Name: Test Name",
            "Email: test@test.io",
            "Description: Test description",
            "GitHub Repo URL: https://test.io",
            "Level: Junior",
        ]
    );
}

#[tokio::test]
async fn test_structured_rejection_keeps_previous_record() {
    let server = TestServer::new().await;
    let api = server.api();
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("portal-data.json"));
    store.set(FORM_DATA_KEY, r#"{"Name":"Earlier"}"#).unwrap();

    // Bypasses the form, so the server-side checks are what reject it
    let values = FormValues {
        name: "Test Name".to_string(),
        email: "test@test.io".to_string(),
        description: "too short".to_string(),
        repo_url: "https://test.io".to_string(),
        level: "Junior".to_string(),
    };
    let navigated = Cell::new(false);
    let navigator = || navigated.set(true);
    let outcome = SubmissionOrchestrator::new(&api, &store, &navigator)
        .submit(&values)
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(vec!["Description must be at least 10 characters".to_string()])
    );
    assert!(!navigated.get());
    assert_eq!(
        read_confirmation(&store),
        ConfirmationView::Filled(vec![("Name".to_string(), "Earlier".to_string())])
    );
}

#[tokio::test]
async fn test_unreachable_api_surfaces_generic_error() {
    let api = HttpCandidatesApi::new("http://127.0.0.1:1/levels", "http://127.0.0.1:1/assignments");
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("portal-data.json"));

    let values = FormValues {
        name: "Test Name".to_string(),
        email: "test@test.io".to_string(),
        description: "Test description".to_string(),
        repo_url: "https://test.io".to_string(),
        level: "Junior".to_string(),
    };
    let navigator = || {};
    let outcome = SubmissionOrchestrator::new(&api, &store, &navigator)
        .submit(&values)
        .await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected(vec![GENERIC_SUBMIT_ERROR.to_string()])
    );
    assert_eq!(read_confirmation(&store), ConfirmationView::Empty);
}

#[tokio::test]
async fn test_payload_is_trimmed_on_the_wire() {
    let server = TestServer::new().await;
    let api = server.api();

    let payload = AssignmentPayload::from(&FormValues {
        name: "  Test Name  ".to_string(),
        email: " test@test.io".to_string(),
        description: "Test description   ".to_string(),
        repo_url: "https://test.io".to_string(),
        level: " Junior ".to_string(),
    });
    assert_eq!(payload.name, "Test Name");
    assert_eq!(payload.candidate_level, "Junior");
    assert!(api.submit_assignment(&payload).await.is_ok());
}
