use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/data.csv", get(handlers::data_csv))
        .route("/api/table", get(handlers::get_table))
        .route("/api/sales", get(handlers::get_sales))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/top", get(handlers::get_top))
        .route("/api/reload", post(handlers::reload))
        .route("/api/color", get(handlers::get_color))
        .route("/api/color/start", post(handlers::color_start))
        .route("/api/color/stop", post(handlers::color_stop))
        .with_state(state)
}
