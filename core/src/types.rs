//! Domain DTOs for the book catalog API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client core never links against axum. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single catalog record. The server stamps `id` from the wall clock in
/// milliseconds when the record is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Payload for create and update. Update is a full replace, so both
/// operations share one shape; the server re-stamps the id from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
}

/// Generic `{"message": ...}` body: the delete confirmation and the
/// update-miss 404 both use it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}
