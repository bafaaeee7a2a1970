/// Request handlers.
///
/// The three listing endpoints are unconditional projections of stored
/// rows; the two normals endpoints run the date-range aggregation. Every
/// handler logs receipt of the request, then hands storage output (or the
/// aggregation result) straight to serialization.

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};

use crate::aggregate;
use crate::api::AppState;
use crate::api::error::ApiError;
use crate::logging::{self, DataSource};
use crate::model::{DailyNormal, PrecipitationReading, StationRecord, TemperatureReading};
use crate::store::ClimateStore;

/// `GET /` — HTML route listing.
pub async fn home() -> Html<&'static str> {
    logging::info(DataSource::Http, None, "request received for '/'");
    Html(
        "Available Routes:<br/><br/>\
         /api/v1.0/precipitation — List of precipitation (prcp) data for the last year on record<br/>\
         /api/v1.0/stations — List of stations<br/>\
         /api/v1.0/tobs — List of temperature observations (tobs) for the last year on record<br/>\
         /api/v1.0/start-date/end-date — List of the minimum, average, and max temperatures \
         for a given start or start-end range<br/>",
    )
}

/// `GET /api/v1.0/precipitation` — precipitation rows since the configured
/// threshold date.
pub async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<PrecipitationReading>>, ApiError> {
    logging::info(DataSource::Http, None, "request received for 'precipitation'");
    let rows = state
        .store
        .precipitation_since(&state.config.query.recent_threshold)
        .await?;
    Ok(Json(rows))
}

/// `GET /api/v1.0/stations` — every station on record.
pub async fn stations(State(state): State<AppState>) -> Result<Json<Vec<StationRecord>>, ApiError> {
    logging::info(DataSource::Http, None, "request received for 'stations'");
    let rows = state.store.stations().await?;
    Ok(Json(rows))
}

/// `GET /api/v1.0/tobs` — temperature observations since the configured
/// threshold date.
pub async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    logging::info(DataSource::Http, None, "request received for 'tobs'");
    let rows = state
        .store
        .temperatures_since(&state.config.query.recent_threshold)
        .await?;
    Ok(Json(rows))
}

/// `GET /api/v1.0/{start}` — daily normals for every recorded date from
/// `start` onward.
pub async fn normals_start(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<DailyNormal>>, ApiError> {
    logging::info(DataSource::Http, Some(&start), "request received for 'date'");
    let normals = aggregate::normals_from(state.store.as_ref(), &start).await?;
    Ok(Json(normals))
}

/// `GET /api/v1.0/{start}/{end}` — daily normals for every recorded date in
/// the inclusive range.
pub async fn normals_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<DailyNormal>>, ApiError> {
    logging::info(
        DataSource::Http,
        Some(&format!("{}/{}", start, end)),
        "request received for 'date range'",
    );
    let normals = aggregate::normals_between(
        state.store.as_ref(),
        &start,
        &end,
        state.config.query.validate_range_bounds,
    )
    .await?;
    Ok(Json(normals))
}
