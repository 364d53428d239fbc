//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use beerbox_types::{
    AppError, BoxPriceQuery, CreateProductRequest, ProductId, ProductRepository, RateError,
    RateProvider, RepoError,
};

use crate::PricingService;

/// `Cache-Control` value for a single product.
const PRIVATE_CACHE: &str = "private, max-age=100";
/// `Cache-Control` value for the product listing.
const PUBLIC_CACHE: &str = "public, max-age=100";

/// Application state shared across handlers.
pub struct AppState<R: ProductRepository, P: RateProvider> {
    pub service: PricingService<R, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rate(RateError::RateNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Rate(RateError::UpstreamRejected(_)) => StatusCode::BAD_GATEWAY,
            AppError::Rate(RateError::Transport(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Repo(RepoError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_id(id: &str) -> Result<ProductId, AppError> {
    id.parse()
        .map_err(|_| AppError::Validation(format!("invalid beer id '{}'", id)))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a beer.
///
/// A body the extractor rejects is reported as 400 with the standard error body.
#[tracing::instrument(skip(state, payload))]
pub async fn create_beer<R: ProductRepository, P: RateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let product = state.service.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all beers.
#[tracing::instrument(skip(state))]
pub async fn list_beers<R: ProductRepository, P: RateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.service.list_products().await?;
    Ok((
        [
            (header::CACHE_CONTROL, PUBLIC_CACHE),
            (header::VARY, "User-Agent"),
        ],
        Json(products),
    ))
}

/// Get beer by ID.
#[tracing::instrument(skip(state), fields(beer_id = %id))]
pub async fn get_beer<R: ProductRepository, P: RateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.service.get_product(parse_id(&id)?).await?;
    Ok((
        [
            (header::CACHE_CONTROL, PRIVATE_CACHE),
            (header::VARY, "User-Agent"),
        ],
        Json(product),
    ))
}

/// Price a box of beers in the requested currency.
#[tracing::instrument(skip(state), fields(beer_id = %id))]
pub async fn box_price<R: ProductRepository, P: RateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
    Query(query): Query<BoxPriceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let result = state
        .service
        .price_box(id, query.quantity(), query.currency())
        .await?;
    Ok(Json(result))
}
