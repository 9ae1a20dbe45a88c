use axum::extract::{Multipart, Path, State};
use axum::Json;

use crate::errors::JsonApiError;
use crate::extract::read_form;
use crate::routes::{MessageResponse, ServerState};

/// Public listing: published blogs only.
#[utoipa::path(
    get, path = "/api/blogs/all", tag = "blogs",
    responses((status = 200, description = "Active blogs"), (status = 500, description = "Server Error"))
)]
pub async fn list_active(State(state): State<ServerState>) -> Result<Json<Vec<models::blog::Model>>, JsonApiError> {
    Ok(Json(state.blogs.list_active().await?))
}

/// Admin listing: every blog regardless of state.
#[utoipa::path(
    get, path = "/api/blogs/", tag = "blogs",
    responses((status = 200, description = "All blogs"), (status = 500, description = "Server Error"))
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<models::blog::Model>>, JsonApiError> {
    Ok(Json(state.blogs.list_all().await?))
}

#[utoipa::path(
    post, path = "/api/blogs/create", tag = "blogs",
    request_body(content = crate::openapi::CreateBlogForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> Result<Json<models::blog::Model>, JsonApiError> {
    let form = read_form(multipart, "image").await?;
    let created = state
        .blogs
        .create(
            form.field("title").unwrap_or_default(),
            form.field("description").unwrap_or_default(),
            form.field("slug").unwrap_or_default(),
            form.file_bytes(),
        )
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    patch, path = "/api/blogs/{id}", tag = "blogs",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Toggled"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::blog::Model>, JsonApiError> {
    Ok(Json(state.blogs.toggle(id).await?))
}

#[utoipa::path(
    delete, path = "/api/blogs/{id}", tag = "blogs",
    params(("id" = i32, Path, description = "Blog ID")),
    responses((status = 200, description = "Deleted"), (status = 500, description = "Server Error"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.blogs.delete(id).await?;
    Ok(Json(MessageResponse { message: "Blog deleted" }))
}
