//! Resource clients for the bookstore API.
//!
//! # Design
//! `ResourceClient<R>` holds only the base URL and a `Transport`; the
//! resource type fixes the collection path. Every operation is split into a
//! pure `build_*` method producing an `HttpRequest` and an executing method
//! that performs one round trip and returns the raw `HttpResponse`, whatever
//! its status. Ids are passed through untouched: zero, negative and
//! out-of-range values are part of what the suites probe.

use std::fmt;
use std::marker::PhantomData;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Author, Book, Resource};

const API_PREFIX: &str = "api/v1";

pub type AuthorsClient = ResourceClient<Author>;
pub type BooksClient = ResourceClient<Book>;

/// Blocking client for one resource collection.
pub struct ResourceClient<R> {
    base_url: String,
    transport: Transport,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport: Transport::new(),
            _resource: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_all(&self) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&self.build_get_all())
    }

    pub fn get_by_id(&self, id: i64) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&self.build_get_by_id(id))
    }

    pub fn create(&self, entity: &R) -> Result<HttpResponse, ApiError> {
        let request = self.build_create(entity)?;
        self.transport.execute(&request)
    }

    pub fn update(&self, id: i64, entity: &R) -> Result<HttpResponse, ApiError> {
        let request = self.build_update(id, entity)?;
        self.transport.execute(&request)
    }

    pub fn delete(&self, id: i64) -> Result<HttpResponse, ApiError> {
        self.transport.execute(&self.build_delete(id))
    }

    pub fn build_get_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: accept_json(),
            body: None,
        }
    }

    pub fn build_get_by_id(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: accept_json(),
            body: None,
        }
    }

    pub fn build_create(&self, entity: &R) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: send_json(),
            body: Some(to_body(entity)?),
        })
    }

    pub fn build_update(&self, id: i64, entity: &R) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: send_json(),
            body: Some(to_body(entity)?),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: accept_json(),
            body: None,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{API_PREFIX}/{}", self.base_url, R::PATH)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{API_PREFIX}/{}/{id}", self.base_url, R::PATH)
    }
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::PATH)
            .field("base_url", &self.base_url())
            .finish()
    }
}

fn accept_json() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}

fn send_json() -> Vec<(String, String)> {
    vec![
        ("accept".to_string(), "application/json".to_string()),
        ("content-type".to_string(), "application/json".to_string()),
    ]
}

fn to_body<T: serde::Serialize>(entity: &T) -> Result<String, ApiError> {
    serde_json::to_string(entity).map_err(|e| ApiError::Serialization(e.to_string()))
}
