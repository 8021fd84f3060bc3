use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::application::market::{DropPlayerCommand, SignPlayerCommand};
use crate::application::teams::{
    CreateTeamCommand, DeleteTeamCommand, GetAllTeamsQuery, GetTeamPlayersQuery, GetTeamQuery,
    PatchTeamCommand, TeamPlayerResponse, TeamResponse, UpdateTeamCommand,
};

/// List every team
///
/// GET /api/v1/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let services = &state.services;
    let teams = services.pipeline.run(&services.teams, GetAllTeamsQuery).await?;

    Ok(Json(teams))
}

/// Create a new team
///
/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(command): ValidatedJson<CreateTeamCommand>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TeamResponse>), ApiError> {
    let services = &state.services;
    let team = services.pipeline.run(&services.teams, command).await?;
    let location = format!("/api/v1/teams/{}", team.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(team)))
}

/// Get a team by ID
///
/// GET /api/v1/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let services = &state.services;
    let team = services
        .pipeline
        .run(&services.teams, GetTeamQuery { id })
        .await?;

    Ok(Json(team))
}

/// Players on a team's roster
///
/// GET /api/v1/teams/:id/players
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<TeamPlayerResponse>>, ApiError> {
    let services = &state.services;
    let players = services
        .pipeline
        .run(&services.teams, GetTeamPlayersQuery { team_id })
        .await?;

    Ok(Json(players))
}

/// Replace a team's profile
///
/// PUT /api/v1/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<UpdateTeamCommand>,
) -> Result<StatusCode, ApiError> {
    command.id = id;
    let services = &state.services;
    services.pipeline.run(&services.teams, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change some of a team's profile fields
///
/// PATCH /api/v1/teams/:id
pub async fn patch_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<PatchTeamCommand>,
) -> Result<StatusCode, ApiError> {
    command.id = id;
    let services = &state.services;
    services.pipeline.run(&services.teams, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team
///
/// DELETE /api/v1/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let services = &state.services;
    services
        .pipeline
        .run(&services.teams, DeleteTeamCommand { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sign a player, transferring it from its current team if any
///
/// POST /api/v1/teams/:id/sign-player
pub async fn sign_player(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<SignPlayerCommand>,
) -> Result<StatusCode, ApiError> {
    command.team_id = team_id;
    let services = &state.services;
    services.pipeline.run(&services.market, command).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Release a player from the team
///
/// POST /api/v1/teams/:id/drop-player
pub async fn drop_player(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    ValidatedJson(mut command): ValidatedJson<DropPlayerCommand>,
) -> Result<StatusCode, ApiError> {
    command.team_id = team_id;
    let services = &state.services;
    services.pipeline.run(&services.market, command).await?;

    Ok(StatusCode::NO_CONTENT)
}
