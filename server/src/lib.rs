//! Backend for the CPP GE recommender.
//!
//! Serves the GE catalog ranked by average GPA so the frontend can show the
//! top courses in each area and section.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /top-courses`: every section ranked, best GPA first.
//!   `numberOfCourses` is still accepted from older clients but does nothing.
//! - `GET /top-courses/filtered`: ranked, then filtered. Query parameters
//!   `showLanguage`, `showHonors`, `showLab`, `showActivity` (all default
//!   `false`) and `limit` (`0..=10`, default `5`, applied per section).
//! - `GET /health`
//!
//! Responses are wrapped as `{ "topCourses": { "areas": [...] } }`.
//!
//!
//!
//! # Data
//!
//! The catalog is one JSON file, loaded once at startup and never written.
//! Ranking and filtering are cheap enough to redo on every request, so
//! nothing is cached.
//!
//!
//!
//! # Setup
//!
//! Run with the bundled 2023 catalog.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Point at another catalog, local or remote.
//! ```sh
//! COURSE_DATA=https://example.com/course-data-2024.json RUST_PORT=8080 cargo run
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use routes::{filtered_courses_handler, health_handler, top_courses_handler};
use state::AppState;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)
        .await
        .context("Failed to load course catalog")?;

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .route("/top-courses", get(top_courses_handler))
        .route("/top-courses/filtered", get(filtered_courses_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use catalog::get_catalog;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/course-data-2023.json");

    fn app() -> Router {
        let config = Config {
            port: 0,
            course_data: BUNDLED.to_string(),
        };

        build_router(AppState::with_catalog(get_catalog(BUNDLED).unwrap(), config))
    }

    async fn get_response(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> Value {
        let (status, body) = get_response(uri).await;
        assert_eq!(status, StatusCode::OK);

        serde_json::from_slice(&body).unwrap()
    }

    fn section_codes(body: &Value, area: usize, section: usize) -> Vec<String> {
        body["topCourses"]["areas"][area]["sections"][section]["courses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|course| course["courseCode"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .oneshot(
                Request::options("/top-courses")
                    .header("origin", "https://ge.example.edu")
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-max-age"], "3600");
        assert!(
            headers["access-control-allow-methods"]
                .to_str()
                .unwrap()
                .contains("GET")
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_response("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_top_courses_ranked() {
        let body = get_json("/top-courses").await;

        assert!(body["topCourses"].get("year").is_none());
        assert_eq!(
            section_codes(&body, 1, 0),
            ["PHYS-1510-H", "GSC-1100", "CHEM-1000", "PHYS-1510"]
        );
        assert_eq!(
            section_codes(&body, 1, 1),
            ["BIO-1100", "BIO-1110", "BOT-1150"]
        );
        assert_eq!(
            body["topCourses"]["areas"][1]["sections"][1]["courses"][2]["averageGPA"],
            Value::Null
        );
    }

    #[tokio::test]
    async fn test_number_of_courses_is_ignored() {
        assert_eq!(
            get_json("/top-courses?numberOfCourses=1").await,
            get_json("/top-courses").await
        );
    }

    #[tokio::test]
    async fn test_filtered_defaults() {
        let body = get_json("/top-courses/filtered").await;

        assert_eq!(
            section_codes(&body, 1, 0),
            ["GSC-1100", "CHEM-1000", "PHYS-1510"]
        );
        assert!(section_codes(&body, 1, 4).is_empty());
        assert_eq!(section_codes(&body, 2, 1), ["PHIL-2040"]);
        assert_eq!(section_codes(&body, 4, 0), ["FN-1210", "PSY-1202"]);
    }

    #[tokio::test]
    async fn test_filtered_toggles_and_limit() {
        let body = get_json("/top-courses/filtered?showHonors=true&showLanguage=true&limit=1").await;

        assert_eq!(section_codes(&body, 1, 0), ["PHYS-1510-H"]);
        // GERMAN-1110 also reads as an activity course
        assert_eq!(section_codes(&body, 2, 1), ["FRENCH-1110"]);
    }

    #[tokio::test]
    async fn test_filtered_limit_zero() {
        let body = get_json("/top-courses/filtered?limit=0").await;

        for area in body["topCourses"]["areas"].as_array().unwrap() {
            for section in area["sections"].as_array().unwrap() {
                assert!(section["courses"].as_array().unwrap().is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_filtered_limit_out_of_range() {
        let (status, body) = get_response("/top-courses/filtered?limit=11").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("out of range"));
    }

    #[tokio::test]
    async fn test_filtered_bad_toggle() {
        let (status, _) = get_response("/top-courses/filtered?showLab=maybe").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
