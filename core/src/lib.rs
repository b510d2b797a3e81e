//! Async client for the wishlist service.
//!
//! # Overview
//! `WishlistClient` carries the configuration, a bearer-authenticated
//! transport and the current user. Its `wishlists()` resource fetches, lists,
//! adds and removes wishlist lines, one HTTP request per call.
//!
//! # Design
//! - `Resource<T>` is the generic `get` / `optional` / `list` contract;
//!   `Wishlists` implements it and adds `add` / `remove`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response) around a single transport call, so the
//!   I/O boundary is explicit.
//! - Models are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resource;
pub mod types;
pub mod wishlists;

pub use client::WishlistClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use resource::Resource;
pub use types::{User, Wishlist, WishlistLine};
pub use wishlists::Wishlists;
