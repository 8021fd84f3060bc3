use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::application::players::{
    CreatePlayerCommand, DeletePlayerCommand, GetAllPlayersQuery, GetPlayerQuery,
    PatchPlayerCommand, PlayerResponse, UpdatePlayerCommand,
};

/// List every player
///
/// GET /api/v1/players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let services = &state.services;
    let players = services
        .pipeline
        .run(&services.players, GetAllPlayersQuery)
        .await?;

    Ok(Json(players))
}

/// Register a new player
///
/// POST /api/v1/players
pub async fn create_player(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreatePlayerCommand>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<PlayerResponse>), ApiError> {
    let services = &state.services;
    let player = services.pipeline.run(&services.players, command).await?;
    let location = format!("/api/v1/players/{}", player.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(player)))
}

/// Get a player by ID
///
/// GET /api/v1/players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let services = &state.services;
    let player = services
        .pipeline
        .run(&services.players, GetPlayerQuery { id })
        .await?;

    Ok(Json(player))
}

/// Replace a player's profile
///
/// PUT /api/v1/players/:id
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<UpdatePlayerCommand>,
) -> Result<StatusCode, ApiError> {
    command.id = id;
    let services = &state.services;
    services.pipeline.run(&services.players, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change some of a player's profile fields
///
/// PATCH /api/v1/players/:id
pub async fn patch_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<PatchPlayerCommand>,
) -> Result<StatusCode, ApiError> {
    command.id = id;
    let services = &state.services;
    services.pipeline.run(&services.players, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a player
///
/// DELETE /api/v1/players/:id
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let services = &state.services;
    services
        .pipeline
        .run(&services.players, DeletePlayerCommand { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
