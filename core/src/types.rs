//! Domain DTOs for the bookstore API.
//!
//! # Design
//! These types mirror the remote service's schema but every field is
//! optional: the suite sends whatever a scenario constructs, including
//! empty or out-of-range values, and tolerates partial records coming back.
//! The mock-server crate defines its own copies; integration tests catch
//! schema drift between the two.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A collection exposed under `/api/v1/{PATH}`.
pub trait Resource: Serialize + DeserializeOwned {
    /// Collection path segment, e.g. `Authors`.
    const PATH: &'static str;

    fn id(&self) -> Option<i64>;
}

/// An author record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_book: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Author {
    pub fn new(id: i64, first_name: &str, last_name: &str) -> Self {
        Self {
            id: Some(id),
            id_book: None,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }
}

impl Resource for Author {
    const PATH: &'static str = "Authors";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A book record. `publish_date` is kept as the raw string the service sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
}

impl Book {
    pub fn new(id: i64, title: &str, description: &str, page_count: i32) -> Self {
        Self {
            id: Some(id),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            page_count: Some(page_count),
            ..Self::default()
        }
    }
}

impl Resource for Book {
    const PATH: &'static str = "Books";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_serializes_camel_case() {
        let author = Author::new(0, "Ada", "Lovelace");
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("idBook").is_none());
    }

    #[test]
    fn author_accepts_nulls_and_missing_fields() {
        let author: Author = serde_json::from_str(r#"{"id":7,"firstName":null}"#).unwrap();
        assert_eq!(author.id, Some(7));
        assert!(author.first_name.is_none());
        assert!(author.last_name.is_none());
    }

    #[test]
    fn book_serializes_page_count() {
        let book = Book::new(0, "Title", "Desc", 123);
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["pageCount"], 123);
        assert_eq!(json["title"], "Title");
        assert!(json.get("publishDate").is_none());
        assert!(json.get("excerpt").is_none());
    }

    #[test]
    fn book_keeps_publish_date_opaque() {
        let book: Book = serde_json::from_str(
            r#"{"id":1,"title":"Book 1","pageCount":100,"publishDate":"2026-10-18T09:12:44.55+00:00"}"#,
        )
        .unwrap();
        assert_eq!(book.publish_date.as_deref(), Some("2026-10-18T09:12:44.55+00:00"));
        assert_eq!(book.page_count, Some(100));
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Author::PATH, "Authors");
        assert_eq!(Book::PATH, "Books");
        assert_eq!(Book::new(5, "", "", 0).id(), Some(5));
        assert_eq!(Author::default().id(), None);
    }
}
