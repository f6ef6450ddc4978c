use crate::aggregate::aggregate_with;
use crate::errors::AppError;
use crate::models::{
    ChartData, ColorStatus, SalesQuery, SummaryQuery, SummaryView, TableResponse, TopQuery,
    YearOrder,
};
use crate::ranking::{DEFAULT_LIMIT, top_groups};
use crate::state::{AppState, Snapshot};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use serde_json::Value;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.current().await;
    Html(render_index(&state.source.to_string(), snapshot.table.row_count()))
}

pub async fn data_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.current().await;
    let body = snapshot.table.to_csv().map_err(AppError::internal)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body))
}

pub async fn get_table(State(state): State<AppState>) -> Json<TableResponse> {
    let snapshot = state.current().await;
    Json(to_table_response(&state, &snapshot))
}

pub async fn get_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> Result<Json<ChartData>, AppError> {
    let data = chart_data(&state).await?;
    Ok(Json(match query.order {
        YearOrder::FirstSeen => data,
        YearOrder::Chronological => data.chronological(),
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Value>, AppError> {
    let data = chart_data(&state).await?;
    let summary = match query.view {
        SummaryView::Monthly => serde_json::to_value(data.monthly.summary()),
        SummaryView::Yearly => serde_json::to_value(data.yearly.summary()),
    }
    .map_err(AppError::internal)?;
    Ok(Json(summary))
}

pub async fn get_top(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Value>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 {
        return Err(AppError::bad_request("limit must be at least 1"));
    }

    let snapshot = state.current().await;
    let series = top_groups(&snapshot.table, &query.group, &query.value, limit)?;
    Ok(Json(serde_json::json!({
        "group": query.group,
        "value": query.value,
        "labels": series.labels,
        "values": series.values,
    })))
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<TableResponse>, AppError> {
    let snapshot = state.reload().await?;
    info!(rows = snapshot.table.row_count(), "table reloaded");
    Ok(Json(to_table_response(&state, &snapshot)))
}

pub async fn get_color(State(state): State<AppState>) -> Json<ColorStatus> {
    Json(state.cycler.status().await)
}

pub async fn color_start(State(state): State<AppState>) -> Json<ColorStatus> {
    state.cycler.start().await;
    Json(state.cycler.status().await)
}

pub async fn color_stop(State(state): State<AppState>) -> Json<ColorStatus> {
    state.cycler.stop().await;
    Json(state.cycler.status().await)
}

async fn chart_data(state: &AppState) -> Result<ChartData, AppError> {
    let snapshot = state.current().await;
    let data = aggregate_with(
        &snapshot.table.rows,
        &snapshot.columns,
        &state.names,
        state.policy,
    )?;
    Ok(data)
}

fn to_table_response(state: &AppState, snapshot: &Snapshot) -> TableResponse {
    TableResponse {
        source: state.source.to_string(),
        loaded_at: snapshot.loaded_at.to_rfc3339(),
        row_count: snapshot.table.row_count(),
        header: snapshot.table.header.clone(),
        rows: snapshot.table.rows.clone(),
    }
}
