//! End-to-end scenarios for the fake bookstore API.
//!
//! # Overview
//! `AuthorSuite` and `BookSuite` each own one client built from a `Config`
//! and expose one method per scenario. A scenario either passes, stops
//! early on a tolerated-but-unplanned status (`Outcome::ShortCircuited`),
//! or fails with a `ScenarioError`: an assertion on an accepted status set
//! or field value, or a transport fault from the client.
//!
//! The live test targets under `tests/` run these against `BASE_URL`; the
//! offline ones run them against the mock server.

pub mod authors;
pub mod books;
pub mod check;
pub mod outcome;
pub mod scenario;
pub mod telemetry;

pub use authors::AuthorSuite;
pub use books::BookSuite;
pub use check::ScenarioError;
pub use outcome::{Outcome, Step};
