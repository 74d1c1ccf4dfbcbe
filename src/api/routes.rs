//! API Routes
//!
//! Configures the Axum router: one route per arithmetic operation plus the
//! operational endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{calculate, health_handler, stats_handler, AppState};
use crate::calc::Operation;
use crate::models::OperandQuery;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /add`, `/subtract`, `/multiply`, `/divide` with `?x=<num>&y=<num>`
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Operation::ALL
        .into_iter()
        .fold(Router::<AppState>::new(), |router, op| {
            router.route(
                &op.route(),
                get(
                    move |State(state): State<AppState>,
                          Query(pairs): Query<Vec<(String, String)>>| {
                        calculate(op, state, OperandQuery::from_pairs(pairs))
                    },
                ),
            )
        });

    router
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
