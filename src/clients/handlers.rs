use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::ClientPayload;
use super::repo_types::{Client, ClientView};
use crate::{
    auth::extractors::AuthUser, error::ApiError, response::ApiResponse, state::AppState,
};

pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client).get(list_clients))
        .route(
            "/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
}

#[instrument(skip(state, user, payload))]
pub async fn create_client(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ClientPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Client>>), ApiError> {
    let name = payload
        .trimmed_name()
        .ok_or_else(|| ApiError::Validation("name is required".into()))?;

    let client = Client::create(
        &state.db,
        name,
        payload.email.as_deref(),
        payload.phone.as_deref(),
        payload.address.as_deref(),
        user.id,
    )
    .await?;

    info!(client_id = client.id, created_by = user.id, "client created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "client created successfully",
            client,
        )),
    ))
}

#[instrument(skip(state, _user))]
pub async fn list_clients(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<ApiResponse<Vec<ClientView>>>, ApiError> {
    let clients = Client::find_all(&state.db).await?;
    Ok(Json(ApiResponse::success(clients)))
}

#[instrument(skip(state, _user))]
pub async fn get_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ClientView>>, ApiError> {
    let client = Client::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("client not found".into()))?;
    Ok(Json(ApiResponse::success(client)))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ClientPayload>,
) -> Result<Json<ApiResponse<Client>>, ApiError> {
    let name = payload
        .trimmed_name()
        .ok_or_else(|| ApiError::Validation("name is required".into()))?;

    let client = Client::update(
        &state.db,
        id,
        name,
        payload.email.as_deref(),
        payload.phone.as_deref(),
        payload.address.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("client not found".into()))?;

    info!(client_id = client.id, "client updated");
    Ok(Json(ApiResponse::success_with_message(
        "client updated successfully",
        client,
    )))
}

#[instrument(skip(state, _user))]
pub async fn delete_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !Client::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("client not found".into()));
    }

    info!(client_id = id, "client deleted");
    Ok(Json(ApiResponse::message("client deleted successfully")))
}
