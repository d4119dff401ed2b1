//! Reservation API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route(
            "/{token}",
            get(handler::get_by_token).delete(handler::cancel),
        )
        .route("/{token}/use", put(handler::use_by_token))
        .route("/code/{code}", get(handler::find_by_code))
        .route("/code/{code}/use", put(handler::use_by_code))
}
