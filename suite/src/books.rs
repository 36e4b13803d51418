//! Scenarios against the Books collection.

use bookstore_core::{Book, BooksClient, Config};

use crate::check::{self, ScenarioError};
use crate::outcome::{Outcome, Step};
use crate::scenario;

pub const SEEDED_ID: i64 = 1;
pub const NON_EXISTING_ID: i64 = 9_999_999;
pub const TITLE: &str = "Automated Test Book";
pub const DESCRIPTION: &str = "Created by automation test";
pub const PAGE_COUNT: i32 = 123;
pub const UPDATED_TITLE: &str = "Updated Title by Test";

/// Book scenarios sharing one client.
#[derive(Debug, Clone)]
pub struct BookSuite {
    client: BooksClient,
}

impl BookSuite {
    pub fn new(config: &Config) -> Self {
        Self {
            client: BooksClient::new(config),
        }
    }

    pub fn get_all(&self) -> Result<Outcome, ScenarioError> {
        scenario::list_not_empty(&self.client)
    }

    pub fn get_by_id(&self) -> Result<Outcome, ScenarioError> {
        scenario::lookup_seeded(&self.client, SEEDED_ID)
    }

    pub fn get_non_existing(&self) -> Result<Outcome, ScenarioError> {
        scenario::lookup_tolerated(&self.client, NON_EXISTING_ID)
    }

    pub fn get_zero_id(&self) -> Result<Outcome, ScenarioError> {
        scenario::lookup_tolerated(&self.client, 0)
    }

    pub fn create_invalid(&self) -> Result<Outcome, ScenarioError> {
        scenario::create_handled(&self.client, &Book::new(-1, "", "", 0))
    }

    /// Create, fetch, retitle, delete, then confirm the id no longer
    /// resolves.
    pub fn create_update_delete(&self) -> Result<Outcome, ScenarioError> {
        let book = Book::new(0, TITLE, DESCRIPTION, PAGE_COUNT);

        let create = self.client.create(&book)?;
        let status = check::status_in(Step::Create, &create, check::CREATE_TOLERATED)?;
        if !check::CREATED.contains(&status) {
            return Ok(Outcome::skip(Step::Create, status));
        }
        let created: Book = create.json()?;
        let id = check::present(Step::Create, "id", created.id)?;
        tracing::info!(id, "book created");

        let fetch = self.client.get_by_id(id)?;
        if fetch.status != 200 {
            return Ok(Outcome::skip(Step::Fetch, fetch.status));
        }
        let mut fetched: Book = fetch.json()?;
        check::equal(Step::Fetch, "title", &book.title, &fetched.title)?;
        check::equal(Step::Fetch, "description", &book.description, &fetched.description)?;
        check::equal(Step::Fetch, "pageCount", &book.page_count, &fetched.page_count)?;

        fetched.title = Some(UPDATED_TITLE.to_string());
        let update = self.client.update(id, &fetched)?;
        if update.status != 200 {
            return Ok(Outcome::skip(Step::Update, update.status));
        }

        let delete = self.client.delete(id)?;
        check::status_in(Step::Delete, &delete, check::DELETE_TOLERATED)?;

        let after = self.client.get_by_id(id)?;
        let status = check::status_in(Step::Verify, &after, check::GONE_AFTER_DELETE)?;
        tracing::info!(id, status, "book gone after delete");
        Ok(Outcome::Passed)
    }
}
