use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::banner::BannerService;
use service::blog::BlogService;
use service::catalog::ServiceCatalog;

pub mod banners;
pub mod blogs;
pub mod services;

/// Handles shared by every request: one service per resource kind, each
/// carrying its injected repository and storage handles.
#[derive(Clone)]
pub struct ServerState {
    pub banners: Arc<BannerService>,
    pub services: Arc<ServiceCatalog>,
    pub blogs: Arc<BlogService>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: resource routes, health, API docs.
pub fn build_router(state: ServerState, cors: CorsLayer, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .route("/api/banners/add", post(banners::add))
        .route("/api/banners/update/:id", put(banners::update))
        .route("/api/banners/all", get(banners::list))
        .route("/api/banners/:id", get(banners::get))
        .route("/api/banners/delete/:id", delete(banners::remove))
        .route("/api/services/add", post(services::add))
        .route("/api/services/all", get(services::list))
        .route("/api/services/delete/:id", delete(services::remove))
        .route("/api/blogs/all", get(blogs::list_active))
        .route("/api/blogs/", get(blogs::list_all))
        .route("/api/blogs/create", post(blogs::create))
        .route("/api/blogs/:id", patch(blogs::toggle).delete(blogs::remove))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
