//! C-ABI wrapper around `book-core`.
//!
//! # Overview
//! Exposes the full book-catalog CRUD contract through `extern "C"`
//! functions so any language with a C FFI can build and parse HTTP
//! requests/responses without linking Rust's async runtime or serde
//! directly. A C frontend built on this surface is a drop-in peer of the
//! Rust CLI: both drive the same client core.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiBookResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `book_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use book_core::http::HttpResponse;
use book_core::types::BookInput;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `BookClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `book_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn book_client_new(base_url: *const c_char) -> *mut FfiBookClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = book_core::BookClient::new(url);
        Box::into_raw(Box::new(FfiBookClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `BookClient` created by `book_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn book_client_free(client: *mut FfiBookClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing the whole catalog.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `book_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn book_build_list_books(client: *const FfiBookClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_list_books();
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating a new book.
///
/// Returns null if `client`, `title`, or `author` is null, or if
/// serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn book_build_create_book(
    client: *const FfiBookClient,
    title: *const c_char,
    author: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || title.is_null() || author.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = BookInput {
            title: unsafe { CStr::from_ptr(title) }.to_str().unwrap_or("").to_string(),
            author: unsafe { CStr::from_ptr(author) }.to_str().unwrap_or("").to_string(),
        };
        match client.inner.build_create_book(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for replacing an existing book.
///
/// The update is a full replace: both `title` and `author` are required,
/// and the server re-stamps the id from the URL.
/// Returns null if `client`, `title`, or `author` is null.
#[unsafe(no_mangle)]
pub extern "C" fn book_build_update_book(
    client: *const FfiBookClient,
    id: i64,
    title: *const c_char,
    author: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || title.is_null() || author.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = BookInput {
            title: unsafe { CStr::from_ptr(title) }.to_str().unwrap_or("").to_string(),
            author: unsafe { CStr::from_ptr(author) }.to_str().unwrap_or("").to_string(),
        };
        match client.inner.build_update_book(id, &input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting a book by id.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn book_build_delete_book(
    client: *const FfiBookClient,
    id: i64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_delete_book(id);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse an HTTP response from a list-books request.
///
/// Returns a result with `data_tag = BookList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn book_parse_list_books(
    client: *const FfiBookClient,
    response: *const FfiHttpResponse,
) -> *mut FfiBookResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiBookResult::null_arg("client");
        }
        if response.is_null() {
            return FfiBookResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_list_books(core_resp) {
            Ok(books) => FfiBookResult::ok_book_list(books),
            Err(e) => FfiBookResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBookResult::panic("panic in book_parse_list_books"))
}

/// Parse an HTTP response from a create-book request.
///
/// Returns a result with `data_tag = Book` on success (status 201).
#[unsafe(no_mangle)]
pub extern "C" fn book_parse_create_book(
    client: *const FfiBookClient,
    response: *const FfiHttpResponse,
) -> *mut FfiBookResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiBookResult::null_arg("client");
        }
        if response.is_null() {
            return FfiBookResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_create_book(core_resp) {
            Ok(book) => FfiBookResult::ok_book(book),
            Err(e) => FfiBookResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBookResult::panic("panic in book_parse_create_book"))
}

/// Parse an HTTP response from an update-book request.
///
/// Returns a result with `data_tag = Book` on success; a 404 maps to the
/// `NotFound` error code.
#[unsafe(no_mangle)]
pub extern "C" fn book_parse_update_book(
    client: *const FfiBookClient,
    response: *const FfiHttpResponse,
) -> *mut FfiBookResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiBookResult::null_arg("client");
        }
        if response.is_null() {
            return FfiBookResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_update_book(core_resp) {
            Ok(book) => FfiBookResult::ok_book(book),
            Err(e) => FfiBookResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBookResult::panic("panic in book_parse_update_book"))
}

/// Parse an HTTP response from a delete-book request.
///
/// Returns a result with `data_tag = Message` on success: `data` is a C
/// string carrying the server's confirmation text.
#[unsafe(no_mangle)]
pub extern "C" fn book_parse_delete_book(
    client: *const FfiBookClient,
    response: *const FfiHttpResponse,
) -> *mut FfiBookResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiBookResult::null_arg("client");
        }
        if response.is_null() {
            return FfiBookResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_delete_book(core_resp) {
            Ok(message) => FfiBookResult::ok_message(message),
            Err(e) => FfiBookResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiBookResult::panic("panic in book_parse_delete_book"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `book_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn book_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiBookResult` returned by any `book_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn book_free_result(result: *mut FfiBookResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::Book => {
                    let book = unsafe { Box::from_raw(result.data as *mut FfiBook) };
                    free_ffi_book_fields(&book);
                }
                FfiDataTag::BookList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiBookList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_book_fields(item);
                        }
                    }
                }
                FfiDataTag::Message => {
                    drop(unsafe { CString::from_raw(result.data as *mut c_char) });
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free the C-string fields of an `FfiBook` (but not the struct itself).
fn free_ffi_book_fields(book: &FfiBook) {
    if !book.title.is_null() {
        drop(unsafe { CString::from_raw(book.title) });
    }
    if !book.author.is_null() {
        drop(unsafe { CString::from_raw(book.author) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn book_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
