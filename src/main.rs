//! Rover Garage server binary.
//!
//! Wires configuration, storage (remote document store with local fallback,
//! or local-only when no remote is configured), application handlers, and the
//! HTTP routers together, then serves.

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use rover_garage::adapters::firestore::{
    FirestoreClient, FirestoreConfig, FirestoreSubmissionRepository, FirestoreTeamRepository,
};
use rover_garage::adapters::http::{
    admin_routes, catalog_routes, team_routes, AdminGate, AdminHandlers, TeamHandlers,
};
use rover_garage::adapters::storage::{
    FallbackSubmissionRepository, FallbackTeamRepository, LocalSubmissionRepository,
    LocalTeamRepository,
};
use rover_garage::application::handlers::admin::{
    CreateSubmissionHandler, DeleteSubmissionHandler, ListSubmissionsHandler, ListTeamsHandler,
    ScoreSubmissionHandler,
};
use rover_garage::application::handlers::team::{
    AddToCartHandler, CheckoutHandler, CreateTeamHandler, GetTeamHandler, RemoveFromCartHandler,
    SellItemHandler, SubmitBuildHandler,
};
use rover_garage::config::AppConfig;
use rover_garage::domain::scoring::GameRules;
use rover_garage::ports::{SubmissionRepository, TeamRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!("Starting Rover Garage");

    let (teams, submissions) = build_repositories(&config)?;
    let rules = config.game.rules();

    let app = build_router(&config, teams, submissions, rules)?;

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Builds the repository pair: remote-with-fallback when Firestore is
/// configured, local-only otherwise.
fn build_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn TeamRepository>, Arc<dyn SubmissionRepository>)> {
    let local_teams = Arc::new(LocalTeamRepository::new(&config.storage.data_dir));
    let local_submissions = Arc::new(LocalSubmissionRepository::new(&config.storage.data_dir));

    match &config.storage.firestore_project_id {
        Some(project_id) => {
            let mut firestore_config = FirestoreConfig::new(project_id)
                .with_base_url(config.storage.firestore_base_url.clone())
                .with_timeout(config.storage.remote_timeout());
            if let Some(key) = config.storage.api_key() {
                firestore_config = firestore_config.with_api_key(key);
            }
            let client = Arc::new(
                FirestoreClient::new(firestore_config)
                    .context("Failed to build Firestore client")?,
            );

            tracing::info!(
                project_id = %project_id,
                "Remote document store configured, local fallback active"
            );
            Ok((
                Arc::new(FallbackTeamRepository::new(
                    Arc::new(FirestoreTeamRepository::new(client.clone())),
                    local_teams,
                )),
                Arc::new(FallbackSubmissionRepository::new(
                    Arc::new(FirestoreSubmissionRepository::new(client)),
                    local_submissions,
                )),
            ))
        }
        None => {
            tracing::info!(
                data_dir = %config.storage.data_dir.display(),
                "No remote store configured, running local-only"
            );
            Ok((local_teams, local_submissions))
        }
    }
}

fn build_router(
    config: &AppConfig,
    teams: Arc<dyn TeamRepository>,
    submissions: Arc<dyn SubmissionRepository>,
    rules: GameRules,
) -> anyhow::Result<Router> {
    let team_handlers = TeamHandlers::new(
        Arc::new(CreateTeamHandler::new(teams.clone(), rules)),
        Arc::new(GetTeamHandler::new(teams.clone())),
        Arc::new(AddToCartHandler::new(teams.clone())),
        Arc::new(RemoveFromCartHandler::new(teams.clone())),
        Arc::new(CheckoutHandler::new(teams.clone())),
        Arc::new(SellItemHandler::new(teams.clone(), rules)),
        Arc::new(SubmitBuildHandler::new(teams.clone(), submissions.clone())),
    );

    let admin_handlers = AdminHandlers::new(
        Arc::new(ListTeamsHandler::new(teams.clone())),
        Arc::new(ListSubmissionsHandler::new(submissions.clone(), rules)),
        Arc::new(CreateSubmissionHandler::new(teams, submissions.clone())),
        Arc::new(ScoreSubmissionHandler::new(submissions.clone(), rules)),
        Arc::new(DeleteSubmissionHandler::new(submissions)),
        rules,
    );

    let gate = Arc::new(AdminGate::from_config(&config.admin));

    let cors = build_cors(config)?;

    Ok(Router::new()
        .nest("/api/catalog", catalog_routes())
        .nest("/api/teams", team_routes(team_handlers))
        .nest("/api/admin", admin_routes(admin_handlers, gate))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors))
}

/// Open CORS in development; the configured origin list otherwise.
fn build_cors(config: &AppConfig) -> anyhow::Result<CorsLayer> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
