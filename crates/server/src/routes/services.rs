use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use service::points::PointsInput;

use crate::errors::JsonApiError;
use crate::extract::read_form;
use crate::routes::{MessageResponse, ServerState};

#[derive(Debug, Serialize)]
pub struct ServiceEnvelope {
    pub message: &'static str,
    pub service: models::service::Model,
}

#[utoipa::path(
    post, path = "/api/services/add", tag = "services",
    request_body(content = crate::openapi::AddServiceForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Added"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Server Error")
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ServiceEnvelope>), JsonApiError> {
    let form = read_form(multipart, "image_file").await?;
    let points = PointsInput::from_fields(form.field_values("points"));
    let created = state
        .services
        .create(
            form.field("title").unwrap_or_default(),
            form.field("description").unwrap_or_default(),
            points,
            form.file_bytes(),
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ServiceEnvelope { message: "Service added successfully", service: created }),
    ))
}

#[utoipa::path(
    get, path = "/api/services/all", tag = "services",
    responses((status = 200, description = "List OK"), (status = 500, description = "Server Error"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::service::Model>>, JsonApiError> {
    Ok(Json(state.services.list().await?))
}

#[utoipa::path(
    delete, path = "/api/services/delete/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses((status = 200, description = "Deleted"), (status = 500, description = "Server Error"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.services.delete(id).await?;
    Ok(Json(MessageResponse { message: "Service deleted successfully" }))
}
