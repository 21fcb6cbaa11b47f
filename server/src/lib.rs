use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Payload for POST and PUT. PUT is a full replace, so both share one shape.
#[derive(Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
}

/// Body of the delete confirmation and the update-miss 404.
#[derive(Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Insertion-ordered collection; GET /books returns it as-is.
pub type Db = Arc<RwLock<Vec<Book>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", put(update_book).delete(delete_book))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let books = db.read().await;
    Json(books.clone())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<BookInput>,
) -> (StatusCode, Json<Book>) {
    // Wall-clock id; two creates in the same millisecond can collide.
    let book = Book {
        id: Utc::now().timestamp_millis(),
        title: input.title,
        author: input.author,
    };
    db.write().await.push(book.clone());
    info!(id = book.id, "book created");
    (StatusCode::CREATED, Json(book))
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, (StatusCode, Json<Message>)> {
    let mut books = db.write().await;
    let slot = books.iter_mut().find(|b| b.id == id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(Message {
                message: format!("book {id} not found"),
            }),
        )
    })?;
    // Full replace, id re-stamped from the path.
    *slot = Book {
        id,
        title: input.title,
        author: input.author,
    };
    info!(id, "book updated");
    Ok(Json(slot.clone()))
}

async fn delete_book(State(db): State<Db>, Path(id): Path<i64>) -> Json<Message> {
    let mut books = db.write().await;
    // No existence check: removing an absent id still reports success.
    books.retain(|b| b.id != id);
    info!(id, "book deleted");
    Json(Message {
        message: "book deleted".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_to_json() {
        let book = Book {
            id: 1700000000000,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 1700000000000i64);
        assert_eq!(json["title"], "The Hobbit");
        assert_eq!(json["author"], "J.R.R. Tolkien");
    }

    #[test]
    fn book_roundtrips_through_json() {
        let book = Book {
            id: 42,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
        };
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, book.id);
        assert_eq!(back.title, book.title);
        assert_eq!(back.author, book.author);
    }

    #[test]
    fn book_input_accepts_empty_strings() {
        // No validation at this layer; blank fields are the client's concern.
        let input: BookInput = serde_json::from_str(r#"{"title":"","author":""}"#).unwrap();
        assert!(input.title.is_empty());
        assert!(input.author.is_empty());
    }

    #[test]
    fn book_input_rejects_missing_author() {
        let result: Result<BookInput, _> = serde_json::from_str(r#"{"title":"Dune"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn book_input_rejects_missing_title() {
        let result: Result<BookInput, _> = serde_json::from_str(r#"{"author":"Frank Herbert"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn message_serializes_to_json() {
        let msg = Message {
            message: "book deleted".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["message"], "book deleted");
    }
}
