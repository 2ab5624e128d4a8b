//! HTTP handlers for admin endpoints: roster, scoring, and export.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::export::csv;
use crate::adapters::http::error::{app_error_response, ErrorResponse};
use crate::adapters::http::team::TeamResponse;
use crate::application::handlers::admin::{
    CreateSubmissionCommand, CreateSubmissionHandler, DeleteSubmissionCommand,
    DeleteSubmissionHandler, ListSubmissionsHandler, ListSubmissionsQuery, ListTeamsHandler,
    ListTeamsQuery, ScoreSubmissionCommand, ScoreSubmissionHandler,
};
use crate::domain::foundation::{House, SubmissionId, TeamId, Timestamp};
use crate::domain::scoring::GameRules;

use super::dto::{HouseFilterQuery, ScoreSubmissionRequest, SubmissionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    list_teams_handler: Arc<ListTeamsHandler>,
    list_submissions_handler: Arc<ListSubmissionsHandler>,
    create_submission_handler: Arc<CreateSubmissionHandler>,
    score_handler: Arc<ScoreSubmissionHandler>,
    delete_handler: Arc<DeleteSubmissionHandler>,
    rules: GameRules,
}

impl AdminHandlers {
    pub fn new(
        list_teams_handler: Arc<ListTeamsHandler>,
        list_submissions_handler: Arc<ListSubmissionsHandler>,
        create_submission_handler: Arc<CreateSubmissionHandler>,
        score_handler: Arc<ScoreSubmissionHandler>,
        delete_handler: Arc<DeleteSubmissionHandler>,
        rules: GameRules,
    ) -> Self {
        Self {
            list_teams_handler,
            list_submissions_handler,
            create_submission_handler,
            score_handler,
            delete_handler,
            rules,
        }
    }
}

fn parse_house_filter(query: &HouseFilterQuery) -> Result<Option<House>, Response> {
    match &query.house {
        None => Ok(None),
        Some(raw) => raw.parse::<House>().map(Some).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }),
    }
}

fn parse_submission_id(raw: &str) -> Result<SubmissionId, Response> {
    raw.parse::<SubmissionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid submission ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/teams - active teams, optionally filtered by house
pub async fn list_teams(
    State(handlers): State<AdminHandlers>,
    Query(query): Query<HouseFilterQuery>,
) -> Response {
    let house = match parse_house_filter(&query) {
        Ok(house) => house,
        Err(response) => return response,
    };

    match handlers.list_teams_handler.handle(ListTeamsQuery { house }).await {
        Ok(records) => {
            let response: Vec<TeamResponse> = records.iter().map(TeamResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => app_error_response(e),
    }
}

/// GET /api/admin/submissions - leaderboard, optionally filtered by house
pub async fn list_submissions(
    State(handlers): State<AdminHandlers>,
    Query(query): Query<HouseFilterQuery>,
) -> Response {
    let house = match parse_house_filter(&query) {
        Ok(house) => house,
        Err(response) => return response,
    };

    match handlers
        .list_submissions_handler
        .handle(ListSubmissionsQuery { house })
        .await
    {
        Ok(submissions) => {
            let response: Vec<SubmissionResponse> = submissions
                .iter()
                .map(|s| SubmissionResponse::from_submission(s, &handlers.rules))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => app_error_response(e),
    }
}

/// POST /api/admin/teams/:id/submission - submit a build on a team's behalf
pub async fn create_submission(
    State(handlers): State<AdminHandlers>,
    Path(team_id): Path<String>,
) -> Response {
    let team_id = match TeamId::from_string(team_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid team ID")),
            )
                .into_response()
        }
    };

    match handlers
        .create_submission_handler
        .handle(CreateSubmissionCommand { team_id })
        .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(SubmissionResponse::from_submission(
                &submission,
                &handlers.rules,
            )),
        )
            .into_response(),
        Err(e) => app_error_response(e),
    }
}

/// PUT /api/admin/submissions/:id/scores - save judge scores
pub async fn score_submission(
    State(handlers): State<AdminHandlers>,
    Path(submission_id): Path<String>,
    Json(req): Json<ScoreSubmissionRequest>,
) -> Response {
    let submission_id = match parse_submission_id(&submission_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ScoreSubmissionCommand {
        submission_id,
        rover_build: req.rover_build,
        coding: req.coding,
        items_collected: req.items_collected,
        core_values: req.core_values,
        notes: req.notes,
        scored_by: req.scored_by,
    };

    match handlers.score_handler.handle(cmd).await {
        Ok(submission) => (
            StatusCode::OK,
            Json(SubmissionResponse::from_submission(
                &submission,
                &handlers.rules,
            )),
        )
            .into_response(),
        Err(e) => app_error_response(e),
    }
}

/// DELETE /api/admin/submissions/:id - discard a submission
pub async fn delete_submission(
    State(handlers): State<AdminHandlers>,
    Path(submission_id): Path<String>,
) -> Response {
    let submission_id = match parse_submission_id(&submission_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSubmissionCommand { submission_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => app_error_response(e),
    }
}

/// GET /api/admin/export - download the scores as CSV
pub async fn export_scores(
    State(handlers): State<AdminHandlers>,
    Query(query): Query<HouseFilterQuery>,
) -> Response {
    let house = match parse_house_filter(&query) {
        Ok(house) => house,
        Err(response) => return response,
    };

    match handlers
        .list_submissions_handler
        .handle(ListSubmissionsQuery { house })
        .await
    {
        Ok(submissions) => {
            let body = csv::submissions_to_csv(&submissions, &handlers.rules);
            let filename = csv::export_filename(Timestamp::now());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => app_error_response(e),
    }
}
