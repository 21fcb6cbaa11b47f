//! Full CRUD lifecycle test against the live book server.
//!
//! # Design
//! Starts the server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that request building and
//! response parsing work end-to-end with the actual server, including the
//! always-succeeds delete and the update-miss 404.

use book_core::{ApiError, BookClient, BookInput, CatalogView, HttpMethod, HttpResponse};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: book_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            book_server::run(listener).await
        })
        .unwrap();
    });

    let client = BookClient::new(&format!("http://{addr}"));
    let mut view = CatalogView::new();

    // Step 2: initial fetch — empty mirror.
    let req = client.build_list_books();
    let books = client.parse_list_books(execute(req)).unwrap();
    view.set_books(books);
    assert!(view.books().is_empty(), "expected empty catalog");

    // Step 3: create a book, patch the mirror from the response.
    let input = BookInput {
        title: "The Hobbit".to_string(),
        author: "J.R.R. Tolkien".to_string(),
    };
    let req = client.build_create_book(&input).unwrap();
    let created = client.parse_create_book(execute(req)).unwrap();
    assert_eq!(created.title, "The Hobbit");
    assert!(created.id > 0);
    let id = created.id;
    view.apply_created(created);

    // Step 4: the created record shows up in a fresh list.
    let req = client.build_list_books();
    let books = client.parse_list_books(execute(req)).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, id);
    assert_eq!(books, view.books());

    // Step 5: update replaces both fields; id comes back unchanged.
    let input = BookInput {
        title: "There and Back Again".to_string(),
        author: "J.R.R. Tolkien".to_string(),
    };
    let req = client.build_update_book(id, &input).unwrap();
    let updated = client.parse_update_book(execute(req)).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "There and Back Again");
    view.apply_updated(updated);

    // Step 6: update on a missing id — NotFound, mirror untouched.
    let req = client.build_update_book(42, &input).unwrap();
    let err = client.parse_update_book(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let req = client.build_list_books();
    let books = client.parse_list_books(execute(req)).unwrap();
    assert_eq!(books, view.books());

    // Step 7: delete returns the confirmation message.
    let req = client.build_delete_book(id);
    let message = client.parse_delete_book(execute(req)).unwrap();
    assert_eq!(message, "book deleted");
    view.apply_deleted(id);

    // Step 8: deleting the same id again still succeeds.
    let req = client.build_delete_book(id);
    assert!(client.parse_delete_book(execute(req)).is_ok());

    // Step 9: list is empty again.
    let req = client.build_list_books();
    let books = client.parse_list_books(execute(req)).unwrap();
    assert!(books.is_empty(), "expected empty catalog after delete");
    assert!(view.books().is_empty());
}
