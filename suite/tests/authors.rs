//! Author scenarios against the service named by `BASE_URL`.
//!
//! These reach the network, so they only run with `cargo test -- --ignored`.

use std::sync::OnceLock;

use bookstore_core::Config;
use bookstore_suite::{telemetry, AuthorSuite, Outcome, ScenarioError};

fn suite() -> &'static AuthorSuite {
    static SUITE: OnceLock<AuthorSuite> = OnceLock::new();
    SUITE.get_or_init(|| {
        telemetry::init();
        AuthorSuite::new(&Config::from_env())
    })
}

fn pass(result: Result<Outcome, ScenarioError>) {
    if let Err(err) = result {
        panic!("{err}");
    }
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn get_all_authors() {
    pass(suite().get_all());
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn get_author_by_id() {
    pass(suite().get_by_id());
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn get_non_existing_author() {
    pass(suite().get_non_existing());
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn create_update_delete_author() {
    pass(suite().create_update_delete());
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn create_author_with_invalid_data() {
    pass(suite().create_invalid());
}

#[test]
#[ignore = "calls the remote bookstore service"]
fn get_author_with_zero_id() {
    pass(suite().get_zero_id());
}
