//! HTTP request handlers for API endpoints

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;
use crate::calendar::DateRange;
use crate::dashboard::{ChartSpec, DashboardView, MetricCard};
use crate::pipeline::ReservationFeatures;

/// Static page that fetches `/dashboard` and draws it.
const INDEX_HTML: &str = include_str!("index.html");

/// GET / - Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "reservations": state.table.len(),
    }))
}

/// Optional check-in filter shared by the data endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQueryParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn parse_date_param(value: &str) -> Result<NaiveDate, ApiError> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}

impl RangeQueryParams {
    /// Resolves the requested range against the table's own bounds.
    ///
    /// A missing bound defaults to the first/last check-in. Returns `None`
    /// when neither bound is given or the table is empty and a bound is
    /// missing.
    fn resolve(&self, bounds: Option<DateRange>) -> Result<Option<DateRange>, ApiError> {
        let start = self
            .start
            .as_deref()
            .map(parse_date_param)
            .transpose()?;
        let end = self
            .end
            .as_deref()
            .map(parse_date_param)
            .transpose()?;

        let range = match (start, end, bounds) {
            (None, None, _) => return Ok(None),
            (Some(start), Some(end), _) => DateRange::new(start, end),
            (Some(start), None, Some(bounds)) => DateRange::new(start, bounds.end.max(start)),
            (None, Some(end), Some(bounds)) => DateRange::new(bounds.start.min(end), end),
            (Some(date), None, None) | (None, Some(date), None) => DateRange::new(date, date),
        };

        if !range.is_valid() {
            return Err(ApiError::InvalidDateRange(
                "Start date must be before or equal to end date".to_string(),
            ));
        }

        Ok(Some(range))
    }
}

fn requested_range(
    state: &AppState,
    params: &RangeQueryParams,
) -> Result<Option<DateRange>, ApiError> {
    params.resolve(state.table.check_in_range())
}

/// GET /dashboard - Full dashboard view
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeQueryParams>,
) -> Result<Json<DashboardView>, ApiError> {
    let range = requested_range(&state, &params)?;
    Ok(Json(state.view(range.as_ref())))
}

/// Response for the date filter bounds
#[derive(Debug, Serialize)]
pub struct RangeResponse {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub cutoff: NaiveDate,
}

/// GET /dashboard/range - Bounds for the check-in date filter
pub async fn get_range(State(state): State<Arc<AppState>>) -> Json<RangeResponse> {
    let bounds = state.table.check_in_range();
    Json(RangeResponse {
        min_date: bounds.map(|range| range.start),
        max_date: bounds.map(|range| range.end),
        cutoff: state.config.cutoff,
    })
}

/// Response for metric card listing
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub range: Option<DateRange>,
    pub cards: Vec<MetricCard>,
    pub warnings: Vec<String>,
}

/// GET /metrics - Metric cards only
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeQueryParams>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let range = requested_range(&state, &params)?;
    let view = state.view(range.as_ref());

    Ok(Json(MetricsResponse {
        range: view.range,
        cards: view.cards,
        warnings: view.warnings,
    }))
}

/// GET /charts/{chart_id} - A single chart specification
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(chart_id): Path<String>,
    Query(params): Query<RangeQueryParams>,
) -> Result<Json<ChartSpec>, ApiError> {
    if !crate::dashboard::CHART_IDS.contains(&chart_id.as_str()) {
        return Err(ApiError::ChartNotFound(chart_id));
    }

    let range = requested_range(&state, &params)?;
    state
        .view(range.as_ref())
        .into_chart(&chart_id)
        .map(Json)
        .ok_or(ApiError::ChartNotFound(chart_id))
}

/// Response for reservation rows
#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub range: Option<DateRange>,
    pub count: usize,
    pub reservations: Vec<ReservationFeatures>,
}

/// GET /reservations - Prepared reservation rows
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeQueryParams>,
) -> Result<Json<ReservationsResponse>, ApiError> {
    let range = requested_range(&state, &params)?;
    let selection = state.select(range.as_ref());

    Ok(Json(ReservationsResponse {
        range: selection.check_in_range(),
        count: selection.len(),
        reservations: selection.records().to_vec(),
    }))
}
