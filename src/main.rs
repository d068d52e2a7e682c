//! Interview Compass server binary.
//!
//! Loads configuration from the environment, wires the adapters to the
//! application handlers, and serves the assessment API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use interview_compass::adapters::http::{assessment_routes, AssessmentHandlers};
use interview_compass::adapters::{GoogleSheetsSink, InMemoryRecordSink, InMemorySessionStore};
use interview_compass::application::{
    CreateSessionHandler, GetResultsHandler, RestartSessionHandler, StartQuestionnaireHandler,
    SubmitAssessmentHandler,
};
use interview_compass::config::AppConfig;
use interview_compass::ports::{RecordSink, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let sink: Arc<dyn RecordSink> = match config.sheets.clone() {
        Some(sheets) => Arc::new(GoogleSheetsSink::new(sheets)),
        None => {
            tracing::warn!(
                "no sheets configuration found; submissions will not be durably stored"
            );
            Arc::new(InMemoryRecordSink::new())
        }
    };

    let handlers = AssessmentHandlers::new(
        Arc::new(CreateSessionHandler::new(store.clone())),
        Arc::new(StartQuestionnaireHandler::new(store.clone())),
        Arc::new(SubmitAssessmentHandler::new(store.clone(), sink)),
        Arc::new(GetResultsHandler::new(store.clone())),
        Arc::new(RestartSessionHandler::new(store)),
        config.theme.clone(),
        config.assets.clone(),
    );

    let app = Router::new()
        .nest("/api/sessions", assessment_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "interview-compass listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}
