//! Frontend-agnostic core for the book catalog.
//!
//! # Overview
//! Everything the catalog frontends share lives here: the API client, which
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and `CatalogView`, the
//! view-state machine every frontend drives (server mirror, search, sort,
//! pagination, form draft, notifications).
//!
//! # Design
//! - `BookClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   crate stays deterministic and testable.
//! - `CatalogView` is only ever patched from parsed server responses, never
//!   optimistically; a failed round-trip leaves the mirror unchanged.
//! - Types use owned `String` / `Vec` fields to simplify the FFI mapping.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::BookClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Book, BookInput, Confirmation};
pub use view::{CatalogView, Draft, Notification, Severity, SortKey};
