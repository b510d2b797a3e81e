//! Domain models for the wishlist API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The service speaks snake_case JSON; the camelCase spellings are accepted as
//! aliases on input so either shape deserializes into the same model.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A user of the wishlist service.
///
/// There is no login flow: the client builds its user from configuration and
/// attaches the placeholder access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    #[serde(default, alias = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// One product-to-wishlist association.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WishlistLine {
    #[serde(alias = "productId")]
    pub product_id: u64,
    #[serde(alias = "wishlistId")]
    pub wishlist_id: u64,
}

impl WishlistLine {
    pub fn new(wishlist_id: u64, product_id: u64) -> Self {
        Self {
            product_id,
            wishlist_id,
        }
    }
}

/// A wishlist as returned by the API. Line order is preserved from the
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    pub id: u64,
    #[serde(alias = "userId")]
    pub user_id: u64,
    #[serde(default)]
    pub lines: Vec<WishlistLine>,
}

impl Wishlist {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line references `product_id`.
    pub fn contains(&self, product_id: u64) -> bool {
        self.lines.iter().any(|line| line.product_id == product_id)
    }
}
