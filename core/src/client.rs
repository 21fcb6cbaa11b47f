//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The host executes the actual round-trip, keeping this crate deterministic
//! and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookInput, Confirmation};

/// Synchronous, stateless client for the book catalog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The host is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BookClient {
    base_url: String,
}

impl BookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_books(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/books", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_book(&self, input: &BookInput) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/books", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_book(&self, id: i64, input: &BookInput) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/books/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_book(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/books/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Delete always succeeds server-side; the payload is the confirmation
    /// message, returned verbatim for the frontend to surface.
    pub fn parse_delete_book(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        let confirmation: Confirmation = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(confirmation.message)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BookClient {
        BookClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_books_produces_correct_request() {
        let req = client().build_list_books();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_book_produces_correct_request() {
        let input = BookInput {
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
        };
        let req = client().build_create_book(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "The Hobbit");
        assert_eq!(body["author"], "J.R.R. Tolkien");
    }

    #[test]
    fn build_update_book_produces_correct_request() {
        let input = BookInput {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
        };
        let req = client().build_update_book(42, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/books/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "1984");
        assert_eq!(body["author"], "George Orwell");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_book_produces_correct_request() {
        let req = client().build_delete_book(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/books/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_books_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"title":"The Hobbit","author":"J.R.R. Tolkien"}]"#.to_string(),
        };
        let books = client().parse_list_books(response).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "The Hobbit");
    }

    #[test]
    fn parse_list_books_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_books(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_book_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1700000000000,"title":"Dune","author":"Frank Herbert"}"#.to_string(),
        };
        let book = client().parse_create_book(response).unwrap();
        assert_eq!(book.id, 1700000000000);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn parse_create_book_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_book(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_book_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":42,"title":"1984","author":"George Orwell"}"#.to_string(),
        };
        let book = client().parse_update_book(response).unwrap();
        assert_eq!(book.id, 42);
        assert_eq!(book.title, "1984");
    }

    #[test]
    fn parse_update_book_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"message":"book 42 not found"}"#.to_string(),
        };
        let err = client().parse_update_book(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_book_returns_message() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"message":"book deleted"}"#.to_string(),
        };
        let msg = client().parse_delete_book(response).unwrap();
        assert_eq!(msg, "book deleted");
    }

    #[test]
    fn parse_delete_book_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "boom".to_string(),
        };
        let err = client().parse_delete_book(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BookClient::new("http://localhost:3000/");
        let req = client.build_list_books();
        assert_eq!(req.path, "http://localhost:3000/books");
    }
}
