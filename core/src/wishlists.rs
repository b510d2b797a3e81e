//! Wishlist endpoints.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; the
//! async method in between only runs the transport. The build/parse halves
//! hold no I/O and are what the unit tests and test vectors exercise.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::resource::Resource;
use crate::types::{Wishlist, WishlistLine};

/// Wishlist resource scoped to one user.
///
/// `list` pages through that user's wishlists; the other operations address
/// wishlists by id.
#[derive(Debug, Clone)]
pub struct Wishlists {
    transport: HttpTransport,
    base_url: String,
    user_id: u64,
}

impl Wishlists {
    pub fn new(transport: HttpTransport, base_url: &str, user_id: u64) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Add `line` to the wishlist it names and return the updated wishlist.
    pub async fn add(&self, line: &WishlistLine) -> Result<Wishlist, ApiError> {
        let request = self.build_add(line)?;
        self.parse_add(self.transport.execute(request).await?)
    }

    /// Remove `line` from its wishlist and return the updated wishlist.
    pub async fn remove(&self, line: &WishlistLine) -> Result<Wishlist, ApiError> {
        let request = self.build_remove(line);
        self.parse_remove(self.transport.execute(request).await?)
    }

    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/wishlists/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list(&self, page: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/users/{}/wishlists?page={page}",
                self.base_url, self.user_id
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add(&self, line: &WishlistLine) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(line).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/wishlists/{}", self.base_url, line.wishlist_id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_remove(&self, line: &WishlistLine) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!(
                "{}/wishlists/{}/lines/{}",
                self.base_url, line.wishlist_id, line.product_id
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Only a 200 is a successful fetch.
    pub fn parse_get(&self, response: HttpResponse) -> Result<Wishlist, ApiError> {
        check_status(&response, |status| status == 200)?;
        decode(&response)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Wishlist>, ApiError> {
        check_status(&response, is_success)?;
        decode(&response)
    }

    pub fn parse_add(&self, response: HttpResponse) -> Result<Wishlist, ApiError> {
        check_status(&response, is_success)?;
        decode(&response)
    }

    pub fn parse_remove(&self, response: HttpResponse) -> Result<Wishlist, ApiError> {
        check_status(&response, is_success)?;
        decode(&response)
    }
}

impl Resource<Wishlist> for Wishlists {
    async fn get(&self, id: u64) -> Result<Wishlist, ApiError> {
        let request = self.build_get(id);
        self.parse_get(self.transport.execute(request).await?)
    }

    async fn list(&self, page: u32) -> Result<Vec<Wishlist>, ApiError> {
        let request = self.build_list(page);
        self.parse_list(self.transport.execute(request).await?)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map rejected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, accept: impl Fn(u16) -> bool) -> Result<(), ApiError> {
    if accept(response.status) {
        return Ok(());
    }
    tracing::warn!(status = response.status, "unexpected wishlist API status");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
