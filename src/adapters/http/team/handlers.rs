//! HTTP handlers for team endpoints: the student-facing shop flow.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{app_error_response, ErrorResponse};
use crate::application::handlers::team::{
    AddToCartCommand, AddToCartHandler, CartSelection, CheckoutCommand, CheckoutHandler,
    CreateTeamCommand, CreateTeamHandler, GetTeamHandler, GetTeamQuery, RemoveFromCartCommand,
    RemoveFromCartHandler, SellItemCommand, SellItemHandler, SubmitBuildCommand,
    SubmitBuildHandler,
};
use crate::domain::foundation::{House, TeamId};

use super::dto::{
    AddToCartRequest, CreateTeamRequest, SellItemRequest, SellItemResponse, SubmitResponse,
    TeamResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TeamHandlers {
    create_handler: Arc<CreateTeamHandler>,
    get_handler: Arc<GetTeamHandler>,
    add_to_cart_handler: Arc<AddToCartHandler>,
    remove_from_cart_handler: Arc<RemoveFromCartHandler>,
    checkout_handler: Arc<CheckoutHandler>,
    sell_handler: Arc<SellItemHandler>,
    submit_handler: Arc<SubmitBuildHandler>,
}

impl TeamHandlers {
    pub fn new(
        create_handler: Arc<CreateTeamHandler>,
        get_handler: Arc<GetTeamHandler>,
        add_to_cart_handler: Arc<AddToCartHandler>,
        remove_from_cart_handler: Arc<RemoveFromCartHandler>,
        checkout_handler: Arc<CheckoutHandler>,
        sell_handler: Arc<SellItemHandler>,
        submit_handler: Arc<SubmitBuildHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            add_to_cart_handler,
            remove_from_cart_handler,
            checkout_handler,
            sell_handler,
            submit_handler,
        }
    }
}

fn parse_team_id(raw: &str) -> Result<TeamId, Response> {
    TeamId::from_string(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid team ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/teams - register a team (login)
pub async fn create_team(
    State(handlers): State<TeamHandlers>,
    Json(req): Json<CreateTeamRequest>,
) -> Response {
    let house = match req.house.parse::<House>() {
        Ok(house) => house,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = CreateTeamCommand {
        grade: req.grade,
        house,
        team_name: req.team_name,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(record) => (StatusCode::CREATED, Json(TeamResponse::from(&record))).into_response(),
        Err(e) => app_error_response(e),
    }
}

/// GET /api/teams/:id - current team state
pub async fn get_team(
    State(handlers): State<TeamHandlers>,
    Path(team_id): Path<String>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetTeamQuery { team_id }).await {
        Ok(record) => (StatusCode::OK, Json(TeamResponse::from(&record))).into_response(),
        Err(e) => app_error_response(e),
    }
}

/// POST /api/teams/:id/cart - add parts to the cart
pub async fn add_to_cart(
    State(handlers): State<TeamHandlers>,
    Path(team_id): Path<String>,
    Json(req): Json<AddToCartRequest>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddToCartCommand {
        team_id,
        items: req
            .items
            .into_iter()
            .map(|line| CartSelection {
                part_id: line.part_id,
                quantity: line.quantity,
            })
            .collect(),
    };

    match handlers.add_to_cart_handler.handle(cmd).await {
        Ok(record) => (StatusCode::OK, Json(TeamResponse::from(&record))).into_response(),
        Err(e) => app_error_response(e),
    }
}

/// DELETE /api/teams/:id/cart/:part_id - drop one cart line
pub async fn remove_from_cart(
    State(handlers): State<TeamHandlers>,
    Path((team_id, part_id)): Path<(String, String)>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RemoveFromCartCommand { team_id, part_id };

    match handlers.remove_from_cart_handler.handle(cmd).await {
        Ok(record) => (StatusCode::OK, Json(TeamResponse::from(&record))).into_response(),
        Err(e) => app_error_response(e),
    }
}

/// POST /api/teams/:id/checkout - pay for the cart
pub async fn checkout(
    State(handlers): State<TeamHandlers>,
    Path(team_id): Path<String>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.checkout_handler.handle(CheckoutCommand { team_id }).await {
        Ok(record) => (StatusCode::OK, Json(TeamResponse::from(&record))).into_response(),
        Err(e) => app_error_response(e),
    }
}

/// POST /api/teams/:id/sell - sell owned parts back
pub async fn sell_item(
    State(handlers): State<TeamHandlers>,
    Path(team_id): Path<String>,
    Json(req): Json<SellItemRequest>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SellItemCommand {
        team_id,
        part_id: req.part_id,
        quantity: req.quantity,
    };

    match handlers.sell_handler.handle(cmd).await {
        Ok(result) => {
            let response = SellItemResponse {
                credited: result.credited,
                team: TeamResponse::from(&result.record),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => app_error_response(e),
    }
}

/// POST /api/teams/:id/submit - freeze the build for judging
pub async fn submit_build(
    State(handlers): State<TeamHandlers>,
    Path(team_id): Path<String>,
) -> Response {
    let team_id = match parse_team_id(&team_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .submit_handler
        .handle(SubmitBuildCommand { team_id })
        .await
    {
        Ok(submission) => {
            let response = SubmitResponse {
                submission_id: submission.id().to_string(),
                message: "Build submitted for judging".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => app_error_response(e),
    }
}
