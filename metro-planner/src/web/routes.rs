//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, warn};

use crate::domain::{Coordinates, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station in the catalog.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .planner
        .planner()
        .catalog()
        .iter()
        .map(|(name, station)| StationResult::from_station(name, station))
        .collect();

    Json(StationsResponse { stations })
}

/// Plan a route from a point to a named station.
///
/// The result is also saved as the last route; a failed save is logged but
/// does not fail the request.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = Coordinates::new(req.lat, req.lon)
        .validate()
        .map_err(|e| AppError::BadRequest {
            message: format!("{e}: {},{}", req.lat, req.lon),
        })?;
    let plan = state.planner.plan(origin, &req.destination).await?;

    let store = state.store.clone();
    let summary = plan.summary();
    match tokio::task::spawn_blocking(move || store.save(&summary)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Failed to save last route"),
        Err(e) => warn!(error = %e, "Route save task failed"),
    }

    Ok(Json(RouteResponse::from_plan(&plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        let message = e.to_string();
        match e {
            RouteError::UnknownStation(_) | RouteError::NotOnNetwork(_) => {
                AppError::NotFound { message }
            }
            RouteError::NoPath { .. } => AppError::Unprocessable { message },
            RouteError::EmptyCatalog => AppError::Internal { message },
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Unprocessable { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = self.message().to_string();

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
