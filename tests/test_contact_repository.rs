//! Contact filtering and failure handling of the backend repository.

mod support;

use contact_greeter::{BackendClient, BackendContactRepository, ContactSource, Metrics};
use mockito::{Matcher, Server};
use support::{rows_body, with_captured_logs};
use tracing::Level;

fn repository_for(server: &mockito::ServerGuard) -> BackendContactRepository {
    BackendContactRepository::new(BackendClient::with_base_url(
        server.url(),
        "test-key".to_string(),
    ))
}

fn mock_rows(server: &mut mockito::ServerGuard, body: String) -> mockito::Mock {
    server
        .mock("GET", "/rest/v1/contatos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

#[test]
fn test_get_contacts_keeps_only_valid_rows_in_order() {
    let mut server = Server::new();
    let mock = mock_rows(
        &mut server,
        r#"[
            {"nome_contato": "Valid Contact 1", "numero_telefone": "5511987654321"},
            {"nome_contato": "Valid Contact 2", "numero_telefone": "5521912345678"},
            {"nome_contato": "Invalid Contact", "numero_telefone": "12345"},
            {"nome_contato": "", "numero_telefone": "5511987654321"},
            {"nome_contato": "Another Invalid", "numero_telefone": null},
            {"nome_contato": "Numeric Phone", "numero_telefone": 5511987654321},
            {"nome_contato": " Spaced ", "numero_telefone": "5599912345678"}
        ]"#
        .to_string(),
    );

    let metrics = Metrics::new();
    let repository = repository_for(&server).with_metrics(metrics.clone());
    let (contacts, logs) = with_captured_logs(|| repository.get_contacts());

    mock.assert();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0].name, "Valid Contact 1");
    assert_eq!(contacts[1].phone.as_str(), "5521912345678");
    assert_eq!(contacts[2].name, " Spaced ");

    assert_eq!(logs.count(Level::WARN), 4);
    assert_eq!(logs.count(Level::ERROR), 0);
    assert!(logs
        .lines_at(Level::WARN)
        .iter()
        .any(|line| line.contains("Invalid Contact - 12345")));
    assert!(logs.contents().contains("3 of 7 contacts are valid"));

    assert_eq!(metrics.contacts_fetched_total(), 7);
    assert_eq!(metrics.contacts_rejected_total(), 4);
}

#[test]
fn test_get_contacts_does_not_deduplicate_or_reorder() {
    let mut server = Server::new();
    let _mock = mock_rows(
        &mut server,
        rows_body(&[
            ("Zoe", "5511987654321"),
            ("Ana", "5511987654321"),
            ("Zoe", "5511987654321"),
        ]),
    );

    let contacts = repository_for(&server).get_contacts();

    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Ana", "Zoe"]);
}

#[test]
fn test_get_contacts_no_data() {
    let mut server = Server::new();
    let _mock = mock_rows(&mut server, "[]".to_string());

    let (contacts, logs) = with_captured_logs(|| repository_for(&server).get_contacts());

    assert!(contacts.is_empty());
    assert_eq!(logs.count(Level::ERROR), 0);
    assert_eq!(logs.count(Level::WARN), 0);
}

#[test]
fn test_get_contacts_backend_failure_degrades_to_empty() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/v1/contatos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Test Exception")
        .create();

    let (contacts, logs) = with_captured_logs(|| repository_for(&server).get_contacts());

    mock.assert();
    assert!(contacts.is_empty());
    assert_eq!(logs.count(Level::ERROR), 1);
    assert!(logs.lines_at(Level::ERROR)[0].contains("Test Exception"));
}

#[test]
fn test_get_contacts_unreachable_backend() {
    let repository = BackendContactRepository::new(BackendClient::with_base_url(
        "http://127.0.0.1:1".to_string(),
        "test-key".to_string(),
    ));

    let (contacts, logs) = with_captured_logs(|| repository.get_contacts());

    assert!(contacts.is_empty());
    assert_eq!(logs.count(Level::ERROR), 1);
}
