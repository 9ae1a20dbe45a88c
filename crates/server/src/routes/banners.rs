use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::errors::JsonApiError;
use crate::extract::read_form;
use crate::routes::{MessageResponse, ServerState};

#[derive(Debug, Serialize)]
pub struct BannerEnvelope {
    pub message: &'static str,
    /// Absent when an update matched no row; the call still reports success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<models::banner::Model>,
}

#[utoipa::path(
    post, path = "/api/banners/add", tag = "banners",
    request_body(content = crate::openapi::AddBannerForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Added"),
        (status = 400, description = "Image missing"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> Result<Json<BannerEnvelope>, JsonApiError> {
    let form = read_form(multipart, "image_url").await?;
    let banner = state.banners.create(form.file_bytes()).await?;
    Ok(Json(BannerEnvelope { message: "Banner added successfully", banner: Some(banner) }))
}

#[utoipa::path(
    put, path = "/api/banners/update/{id}", tag = "banners",
    params(("id" = i32, Path, description = "Banner ID")),
    request_body(content = crate::openapi::UpdateBannerForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<BannerEnvelope>, JsonApiError> {
    let form = read_form(multipart, "image_file").await?;
    let is_active = match form.field("is_active") {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        Some(other) => {
            return Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                format!("invalid is_active value: {}", other),
                None,
            ))
        }
        None => return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "is_active is required", None)),
    };

    let banner = state
        .banners
        .update(id, is_active, form.field("image_url"), form.file_bytes())
        .await?;
    Ok(Json(BannerEnvelope { message: "Banner updated successfully", banner }))
}

#[utoipa::path(
    get, path = "/api/banners/all", tag = "banners",
    responses((status = 200, description = "List OK"), (status = 500, description = "Server Error"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::banner::Model>>, JsonApiError> {
    Ok(Json(state.banners.list().await?))
}

#[utoipa::path(
    get, path = "/api/banners/{id}", tag = "banners",
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::banner::Model>, JsonApiError> {
    match state.banners.get(id).await? {
        Some(banner) => Ok(Json(banner)),
        None => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Banner not found", None)),
    }
}

#[utoipa::path(
    delete, path = "/api/banners/delete/{id}", tag = "banners",
    params(("id" = i32, Path, description = "Banner ID")),
    responses((status = 200, description = "Deleted"), (status = 500, description = "Server Error"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.banners.delete(id).await?;
    Ok(Json(MessageResponse { message: "Banner deleted successfully" }))
}
