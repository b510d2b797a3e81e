use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

/// Wishlists returned per page by the user listing.
pub const PAGE_SIZE: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistLine {
    pub product_id: u64,
    pub wishlist_id: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: u64,
    pub user_id: u64,
    pub lines: Vec<WishlistLine>,
}

/// Body of an add-line request. The wishlist id in the path wins over the
/// one in the body.
#[derive(Deserialize)]
pub struct NewLine {
    pub product_id: u64,
    #[serde(default)]
    pub wishlist_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Wishlist>>>;

/// Fixture data: wishlist 1 (user 1, four lines), wishlist 2 (user 1,
/// empty), wishlist 3 (user 2, one line).
pub fn seed() -> Db {
    let wishlist = |id, user_id, products: &[u64]| Wishlist {
        id,
        user_id,
        lines: products
            .iter()
            .map(|&product_id| WishlistLine {
                product_id,
                wishlist_id: id,
            })
            .collect(),
    };
    let db = [wishlist(1, 1, &[1, 2, 3, 4]), wishlist(2, 1, &[]), wishlist(3, 2, &[7])]
        .into_iter()
        .map(|w| (w.id, w))
        .collect();
    Arc::new(RwLock::new(db))
}

pub fn app() -> Router {
    let api = Router::new()
        .route("/wishlists/{id}", get(get_wishlist).post(add_line))
        .route("/wishlists/{id}/lines/{product_id}", delete(remove_line))
        .route("/users/{id}/wishlists", get(list_user_wishlists))
        .route_layer(middleware::from_fn(require_bearer))
        .with_state(seed());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(request: Request, next: Next) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn get_wishlist(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Wishlist>, StatusCode> {
    let wishlists = db.read().await;
    wishlists.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_user_wishlists(
    State(db): State<Db>,
    Path(user_id): Path<u64>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Wishlist>> {
    let page = query.page.unwrap_or(1).max(1) as usize;
    let skip = (page - 1).saturating_mul(PAGE_SIZE);
    let wishlists = db.read().await;
    Json(
        wishlists
            .values()
            .filter(|w| w.user_id == user_id)
            .skip(skip)
            .take(PAGE_SIZE)
            .cloned()
            .collect(),
    )
}

async fn add_line(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<NewLine>,
) -> Result<Json<Wishlist>, StatusCode> {
    let mut wishlists = db.write().await;
    let wishlist = wishlists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if input.wishlist_id.is_some_and(|body_id| body_id != id) {
        tracing::debug!(path_id = id, body_id = ?input.wishlist_id, "wishlist id mismatch, using path");
    }
    let line = WishlistLine {
        product_id: input.product_id,
        wishlist_id: id,
    };
    if !wishlist.lines.contains(&line) {
        wishlist.lines.push(line);
    }
    Ok(Json(wishlist.clone()))
}

async fn remove_line(
    State(db): State<Db>,
    Path((id, product_id)): Path<(u64, u64)>,
) -> Result<Json<Wishlist>, StatusCode> {
    let mut wishlists = db.write().await;
    let wishlist = wishlists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let position = wishlist
        .lines
        .iter()
        .position(|line| line.product_id == product_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    wishlist.lines.remove(position);
    Ok(Json(wishlist.clone()))
}
