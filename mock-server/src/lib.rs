//! In-process stand-in for the public fake bookstore API.
//!
//! Serves `/api/v1/Authors` and `/api/v1/Books` with seeded records.
//! `Persistence::Stored` keeps writes; `Persistence::Echo` answers writes
//! by echoing the request body and stores nothing, which is how the public
//! service behaves.

use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: i64,
    pub id_book: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub page_count: i32,
    pub excerpt: Option<String>,
    pub publish_date: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Stored,
    Echo,
}

pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Record> Table<T> {
    fn seeded(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            rows: rows.into_iter().map(|row| (row.id(), row)).collect(),
            next_id,
        }
    }
}

pub struct Store {
    persistence: Persistence,
    authors: Table<Author>,
    books: Table<Book>,
}

impl Store {
    pub fn seeded(persistence: Persistence) -> Self {
        let authors = (1..=3)
            .map(|n| Author {
                id: n,
                id_book: n,
                first_name: Some(format!("First Name {n}")),
                last_name: Some(format!("Last Name {n}")),
            })
            .collect();
        let books = (1..=3)
            .map(|n| Book {
                id: n,
                title: Some(format!("Book {n}")),
                description: Some(format!("Description of book {n}")),
                page_count: n as i32 * 100,
                excerpt: Some(format!("Excerpt of book {n}")),
                publish_date: Some("2026-01-01T00:00:00+00:00".to_string()),
            })
            .collect();
        Self {
            persistence,
            authors: Table::seeded(authors),
            books: Table::seeded(books),
        }
    }
}

/// A row type with an integer key, bound to its table in the store.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn table(store: &Store) -> &Table<Self>;
    fn table_mut(store: &mut Store) -> &mut Table<Self>;
}

impl Record for Author {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(store: &Store) -> &Table<Self> {
        &store.authors
    }
    fn table_mut(store: &mut Store) -> &mut Table<Self> {
        &mut store.authors
    }
}

impl Record for Book {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn table(store: &Store) -> &Table<Self> {
        &store.books
    }
    fn table_mut(store: &mut Store) -> &mut Table<Self> {
        &mut store.books
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Persistence::Stored)
}

pub fn app_with(persistence: Persistence) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(persistence)));
    Router::new()
        .route("/api/v1/Authors", get(list::<Author>).post(create::<Author>))
        .route(
            "/api/v1/Authors/{id}",
            get(fetch::<Author>).put(update::<Author>).delete(remove::<Author>),
        )
        .route("/api/v1/Books", get(list::<Book>).post(create::<Book>))
        .route(
            "/api/v1/Books/{id}",
            get(fetch::<Book>).put(update::<Book>).delete(remove::<Book>),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener, persistence: Persistence) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(persistence)).await
}

/// Serve `router` on an ephemeral localhost port from a background thread.
pub fn spawn(router: Router) -> std::io::Result<SocketAddr> {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = std_listener.local_addr()?;
    std_listener.set_nonblocking(true)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    std::thread::spawn(move || {
        let served = rt.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            axum::serve(listener, router).await
        });
        if let Err(err) = served {
            tracing::error!(%addr, %err, "mock server stopped");
        }
    });
    Ok(addr)
}

async fn list<T: Record>(State(db): State<Db>) -> Json<Vec<T>> {
    let store = db.read().await;
    Json(T::table(&store).rows.values().cloned().collect())
}

async fn create<T: Record>(State(db): State<Db>, Json(mut input): Json<T>) -> Json<T> {
    let mut store = db.write().await;
    if store.persistence == Persistence::Echo {
        return Json(input);
    }
    let table = T::table_mut(&mut store);
    let id = table.next_id;
    table.next_id += 1;
    input.set_id(id);
    table.rows.insert(id, input.clone());
    Json(input)
}

async fn fetch<T: Record>(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<T>, StatusCode> {
    let store = db.read().await;
    T::table(&store).rows.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update<T: Record>(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(mut input): Json<T>,
) -> Result<Json<T>, StatusCode> {
    let mut store = db.write().await;
    if store.persistence == Persistence::Echo {
        return Ok(Json(input));
    }
    let row = T::table_mut(&mut store).rows.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    input.set_id(id);
    *row = input.clone();
    Ok(Json(input))
}

async fn remove<T: Record>(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    if store.persistence == Persistence::Echo {
        return StatusCode::OK;
    }
    match T::table_mut(&mut store).rows.remove(&id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_serializes_camel_case() {
        let author = Author {
            id: 1,
            id_book: 2,
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["idBook"], 2);
        assert_eq!(json["firstName"], "Ada");
        assert!(json["lastName"].is_null());
    }

    #[test]
    fn book_missing_fields_default() {
        let book: Book = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(book.id, 0);
        assert_eq!(book.title.as_deref(), Some("Only title"));
        assert_eq!(book.page_count, 0);
        assert!(book.publish_date.is_none());
    }

    #[test]
    fn seeded_store_continues_ids_after_seed() {
        let store = Store::seeded(Persistence::Stored);
        assert_eq!(store.authors.rows.len(), 3);
        assert_eq!(store.books.rows.len(), 3);
        assert_eq!(store.authors.next_id, 4);
        assert_eq!(store.books.rows[&2].page_count, 200);
    }
}
