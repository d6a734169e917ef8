use crate::domain;
use crate::interface_adapters::http::ErrorResponse;
use crate::interface_adapters::protocol::{
    AnalysisDto, CountryDto, HomeDto, SelectRequest, SelectionDto, ViewLinkDto, ViewSnapshotDto,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{SelectError, prepare_selection};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::warn;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/analysis", get(analysis))
        .route("/game", get(game))
        .route("/game/log", get(game_log))
        .route("/game/select", post(select))
        .route("/countries", get(list_countries))
        .route("/countries/{id}", get(get_country))
        .with_state(state)
}

async fn home() -> Json<HomeDto> {
    Json(HomeDto {
        views: vec![
            ViewLinkDto {
                name: "Home",
                path: "/",
            },
            ViewLinkDto {
                name: "Analysis",
                path: "/analysis",
            },
            ViewLinkDto {
                name: "Game",
                path: "/game",
            },
        ],
    })
}

async fn analysis(State(state): State<Arc<AppState>>) -> Json<AnalysisDto> {
    let game_in_progress = state.view_rx.borrow().game_in_progress;
    Json(AnalysisDto {
        game_in_progress,
        countries: domain::countries().iter().map(CountryDto::from).collect(),
    })
}

async fn game(State(state): State<Arc<AppState>>) -> Json<ViewSnapshotDto> {
    Json(ViewSnapshotDto::from(&*state.view_rx.borrow()))
}

async fn game_log(State(state): State<Arc<AppState>>) -> String {
    state.view_rx.borrow().log_line.clone()
}

async fn list_countries() -> Json<Vec<CountryDto>> {
    Json(domain::countries().iter().map(CountryDto::from).collect())
}

async fn get_country(Path(id): Path<String>) -> impl IntoResponse {
    match domain::country(&id) {
        Some(entry) => (StatusCode::OK, Json(CountryDto::from(entry))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("country not found")),
        )
            .into_response(),
    }
}

async fn select(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectRequest>,
) -> impl IntoResponse {
    // Clone out of the watch so the borrow is not held across the send.
    let view = state.view_rx.borrow().clone();

    let selection = match prepare_selection(&view, &payload.option) {
        Ok(selection) => selection,
        Err(SelectError::BlankOption) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("option is required")),
            )
                .into_response();
        }
        Err(SelectError::NoActivePrompt) => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("no active prompt")),
            )
                .into_response();
        }
    };

    let body = SelectionDto::from(selection.clone());
    if state.selection_tx.send(selection).await.is_err() {
        warn!("selection dropped; game server socket is gone");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new("game server unavailable")),
        )
            .into_response();
    }

    (StatusCode::ACCEPTED, Json(body)).into_response()
}
