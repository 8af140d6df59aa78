//! Outbreak impact endpoints
//!
//! Each estimate endpoint takes one input record as JSON. The bare path and
//! `/json` answer with the JSON estimate, `/xml` with the same estimate as
//! XML, and `/logs` with the recent request log as plain text.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use impact_core::{ImpactEstimate, InputRecord};

use super::AppState;
use crate::error::ApiError;

/// Build the estimate routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/on-covid-19", post(estimate_json))
        .route("/api/v1/on-covid-19/json", post(estimate_json))
        .route("/api/v1/on-covid-19/xml", post(estimate_xml))
        .route("/api/v1/on-covid-19/logs", get(request_logs))
}

fn estimate_body(body: &[u8]) -> Result<ImpactEstimate, ApiError> {
    let input = InputRecord::from_slice(body)?;
    let estimate = impact_core::run(&input)?;
    tracing::debug!(
        reported_cases = %input.reported_cases,
        days = input.days(),
        "Estimate computed"
    );
    Ok(estimate)
}

/// POST /api/v1/on-covid-19[/json]
async fn estimate_json(body: Bytes) -> Result<Json<ImpactEstimate>, ApiError> {
    Ok(Json(estimate_body(&body)?))
}

/// POST /api/v1/on-covid-19/xml
async fn estimate_xml(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let xml = estimate_body(&body)?.to_xml()?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

/// GET /api/v1/on-covid-19/logs
async fn request_logs(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.request_log.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::ErrorResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const DEMO: &str = r#"{
        "region": {"name": "Africa", "avgAge": 19.7, "avgDailyIncomeInUSD": 5, "avgDailyIncomePopulation": 0.71},
        "periodType": "days",
        "timeToElapse": 58,
        "reportedCases": 674,
        "population": 66622705,
        "totalHospitalBeds": 1380614
    }"#;

    fn create_router() -> Router {
        routes().with_state(AppState::new(Arc::new(ServerConfig::default())))
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_estimate_json_demo() {
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19", DEMO))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["impact"]["currentlyInfected"], 6740);
        assert_eq!(value["impact"]["infectionsByRequestedTime"], 3_533_701_120_i64);
        assert_eq!(value["impact"]["hospitalBedsByRequestedTime"], -529_571_954);
        assert_eq!(value["impact"]["dollarsInFlight"], 216_286_878);
        assert_eq!(value["severeImpact"]["currentlyInfected"], 33700);
        assert_eq!(value["severeImpact"]["dollarsInFlight"], 1_081_434_394);
        assert_eq!(value["data"]["region"]["name"], "Africa");
        assert_eq!(value["data"]["population"], 66_622_705);
    }

    #[tokio::test]
    async fn test_json_alias_matches_bare_path() {
        let router = create_router();

        let bare = router
            .clone()
            .oneshot(post("/api/v1/on-covid-19", DEMO))
            .await
            .unwrap();
        let json = router
            .oneshot(post("/api/v1/on-covid-19/json", DEMO))
            .await
            .unwrap();

        assert_eq!(body_bytes(bare).await, body_bytes(json).await);
    }

    #[tokio::test]
    async fn test_estimate_xml() {
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19/xml", DEMO))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/xml"
        );

        let body = body_bytes(response).await;
        let xml = std::str::from_utf8(&body).unwrap();
        assert!(xml.starts_with("<estimate>"));
        assert!(xml.contains("<currentlyInfected>6740</currentlyInfected>"));
        assert!(xml.contains("<dollarsInFlight>1081434394</dollarsInFlight>"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19", "not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error, "invalid_input");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let body = DEMO.replace("\"reportedCases\": 674,", "");
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19/xml", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.field.as_deref(), Some("reportedCases"));
    }

    #[tokio::test]
    async fn test_mistyped_field_is_named() {
        let body = DEMO.replace("\"reportedCases\": 674", "\"reportedCases\": \"ten\"");
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error, "invalid_input");
        assert_eq!(error.field.as_deref(), Some("reportedCases"));
    }

    #[tokio::test]
    async fn test_mistyped_region_field_is_named() {
        let body = DEMO.replace("\"avgDailyIncomeInUSD\": 5", "\"avgDailyIncomeInUSD\": \"5\"");
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19/json", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.field.as_deref(), Some("region.avgDailyIncomeInUSD"));
    }

    #[tokio::test]
    async fn test_fractional_window_is_accepted() {
        let body = DEMO
            .replace("\"periodType\": \"days\"", "\"periodType\": \"weeks\"")
            .replace("\"timeToElapse\": 58", "\"timeToElapse\": 1.5");
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(value["impact"]["infectionsByRequestedTime"], 53_920);
        assert_eq!(value["impact"]["dollarsInFlight"], 18_230);
        assert_eq!(value["data"]["timeToElapse"], 1.5);
        assert_eq!(value["data"]["region"]["avgDailyIncomeInUSD"], 5);
    }

    #[tokio::test]
    async fn test_zero_day_window_is_unprocessable() {
        let body = DEMO.replace("\"timeToElapse\": 58", "\"timeToElapse\": 0");
        let response = create_router()
            .oneshot(post("/api/v1/on-covid-19", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.error, "zero_day_window");
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/on-covid-19")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_logs_are_plain_text() {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/on-covid-19/logs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        // No middleware on the bare route group, so nothing was recorded.
        assert!(body_bytes(response).await.is_empty());
    }
}
