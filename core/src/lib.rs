//! Blocking client core for the fake bookstore REST API.
//!
//! # Overview
//! One `ResourceClient` per collection (`AuthorsClient`, `BooksClient`),
//! each issuing exactly one HTTP request per call and returning the raw
//! response. Status codes are never interpreted here; the scenario suites
//! decide which ones they accept.
//!
//! # Design
//! - `Config` is resolved once (from `BASE_URL` or the public default) and
//!   injected into clients.
//! - Request building is pure (`build_*`); `Transport` owns the I/O.
//! - Models treat every field as optional so edge-case payloads can be sent
//!   and partial records read back.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{AuthorsClient, BooksClient, ResourceClient};
pub use config::{Config, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{Author, Book, Resource};
