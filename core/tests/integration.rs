//! Every client operation over real HTTP against the mock server.
//!
//! # Design
//! Starts the mock server on a random port and drives both resource
//! clients through their full surface with ureq underneath. Statuses are
//! asserted on the raw responses, since the clients never interpret them.

use bookstore_core::{ApiError, Author, AuthorsClient, Book, BooksClient, Config};
use axum::{
    http::{HeaderName, HeaderValue},
    routing::get,
    Router,
};
use mock_server::Persistence;

fn config(persistence: Persistence) -> Config {
    let addr = mock_server::spawn(mock_server::app_with(persistence)).unwrap();
    Config::with_base_url(&format!("http://{addr}"))
}

#[test]
fn author_crud_lifecycle() {
    let client = AuthorsClient::new(&config(Persistence::Stored));

    // Step 1: list the seed.
    let resp = client.get_all().unwrap();
    assert_eq!(resp.status, 200);
    assert!(resp.is_success());
    assert!(resp.header("content-type").unwrap().starts_with("application/json"));
    let authors: Vec<Author> = resp.json().unwrap();
    assert_eq!(authors.len(), 3);

    // Step 2: create.
    let input = Author::new(0, "TestAuthor", "AutomationTest");
    let resp = client.create(&input).unwrap();
    assert_eq!(resp.status, 200);
    let created: Author = resp.json().unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.first_name, input.first_name);

    // Step 3: fetch.
    let fetched: Author = client.get_by_id(id).unwrap().json().unwrap();
    assert_eq!(fetched.first_name.as_deref(), Some("TestAuthor"));
    assert_eq!(fetched.last_name.as_deref(), Some("AutomationTest"));

    // Step 4: update.
    let mut changed = fetched.clone();
    changed.last_name = Some("UpdatedByTest".to_string());
    let resp = client.update(id, &changed).unwrap();
    assert_eq!(resp.status, 200);
    let fetched: Author = client.get_by_id(id).unwrap().json().unwrap();
    assert_eq!(fetched.last_name.as_deref(), Some("UpdatedByTest"));

    // Step 5: delete, then the id is gone.
    assert_eq!(client.delete(id).unwrap().status, 200);
    assert_eq!(client.get_by_id(id).unwrap().status, 404);
    assert_eq!(client.delete(id).unwrap().status, 404);
}

#[test]
fn book_edge_ids_are_returned_as_responses() {
    let client = BooksClient::new(&config(Persistence::Stored));

    for id in [9_999_999, 0, -1] {
        let resp = client.get_by_id(id).unwrap();
        assert_eq!(resp.status, 404, "id {id}");
        assert!(!resp.is_success());
    }
    let resp = client.update(424_242, &Book::new(424_242, "t", "d", 1)).unwrap();
    assert_eq!(resp.status, 404);
}

#[test]
fn book_echo_mode_does_not_persist() {
    let client = BooksClient::new(&config(Persistence::Echo));

    let input = Book::new(0, "Automated Test Book", "Created by automation test", 123);
    let resp = client.create(&input).unwrap();
    assert_eq!(resp.status, 200);
    let echoed: Book = resp.json().unwrap();
    assert_eq!(echoed.id, Some(0));
    assert_eq!(echoed.title, input.title);

    assert_eq!(client.get_by_id(0).unwrap().status, 404);
    assert_eq!(client.get_all().unwrap().json::<Vec<Book>>().unwrap().len(), 3);
}

#[test]
fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a local port nobody is listening on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let client = AuthorsClient::new(&Config::with_base_url(&format!("http://{addr}")));

    let err = client.get_all().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn non_utf8_header_values_are_kept() {
    let router = Router::new().route(
        "/api/v1/Authors",
        get(|| async {
            (
                [(
                    HeaderName::from_static("x-raw"),
                    HeaderValue::from_bytes(b"caf\xe9").unwrap(),
                )],
                "[]",
            )
        }),
    );
    let addr = mock_server::spawn(router).unwrap();
    let client = AuthorsClient::new(&Config::with_base_url(&format!("http://{addr}")));

    let resp = client.get_all().unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("x-raw"), Some("caf\u{fffd}"));
}
