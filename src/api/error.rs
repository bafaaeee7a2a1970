/// Maps domain errors onto HTTP responses.
///
/// The three request-scoped failures (bad format, out-of-range date, no
/// historical data) all surface as 404 with a descriptive `error` body,
/// matching the reference API contract. Storage failures are logged and
/// surface as 500 with a generic body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::logging::{self, DataSource};
use crate::model::QueryError;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Newtype so `QueryError` can implement axum's `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            QueryError::Store(err) => {
                logging::error(DataSource::Db, None, &format!("query failed: {}", err));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal storage error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_scoped_errors_are_404() {
        for err in [
            QueryError::InvalidDateFormat("2017-1-1".to_string()),
            QueryError::NoHistoricalData("02-29".to_string()),
        ] {
            let response = ApiError(err).into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_error_body_serializes_to_error_key() {
        let body = ErrorBody {
            error: "Invalid date format of '2017-1-1'. Format must be 'YYYY-MM-DD'.".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json["error"],
            "Invalid date format of '2017-1-1'. Format must be 'YYYY-MM-DD'."
        );
    }
}
