//! Entry point tying configuration, transport and resources together.

use crate::config::{ClientConfig, PLACEHOLDER_ACCESS_TOKEN};
use crate::error::ApiError;
use crate::http::HttpTransport;
use crate::types::User;
use crate::wishlists::Wishlists;

/// Async client for the wishlist service.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WishlistClient {
    config: ClientConfig,
    base_url: String,
    user: User,
    transport: HttpTransport,
}

impl WishlistClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let user = User {
            id: config.user_id,
            access_token: Some(PLACEHOLDER_ACCESS_TOKEN.to_string()),
            refresh_token: None,
        };
        let transport = HttpTransport::new(PLACEHOLDER_ACCESS_TOKEN)?;
        let base_url = config.base_url();
        tracing::debug!(%base_url, user_id = user.id, "wishlist client configured");

        Ok(Self {
            config,
            base_url,
            user,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Wishlists of the configured user.
    pub fn wishlists(&self) -> Wishlists {
        self.wishlists_for(self.user.id)
    }

    /// Wishlists of an arbitrary user.
    pub fn wishlists_for(&self, user_id: u64) -> Wishlists {
        Wishlists::new(self.transport.clone(), &self.base_url, user_id)
    }
}
