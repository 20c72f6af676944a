//! Serene backend entry point.
//!
//! Loads configuration, connects infrastructure, wires the application
//! handlers to their adapters, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use serene::adapters::auth::{FirebaseConfig, FirebaseSessionValidator};
use serene::adapters::http::inference::{inference_routes, InferenceHandlers};
use serene::adapters::http::metrics::{metric_routes, MetricHandlers};
use serene::adapters::http::middleware::{auth_middleware, AuthState};
use serene::adapters::http::users::{user_routes, UserHandlers};
use serene::adapters::ml::{HttpPredictorClient, PredictorConfig};
use serene::adapters::postgres::{PgMetricStore, PgUserStore};
use serene::application::handlers::inference::RunInferenceHandler;
use serene::application::handlers::metrics::{ListMetricsHandler, RecordMetricHandler};
use serene::application::handlers::users::{GetProfileHandler, RegisterUserHandler};
use serene::config::AppConfig;
use serene::ports::{
    MetricReader, MetricRepository, PredictorClient, UserReader, UserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "Starting serene backend"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection pool established");

    let user_store = Arc::new(PgUserStore::new(pool.clone()));
    let metric_store = Arc::new(PgMetricStore::new(pool.clone()));

    let predictor: Arc<dyn PredictorClient> = Arc::new(HttpPredictorClient::new(
        PredictorConfig::new(config.ml.base_url.clone())
            .with_timeout(Duration::from_secs(config.ml.timeout_secs)),
    ));

    let validator: AuthState = Arc::new(FirebaseSessionValidator::new(
        FirebaseConfig::new(config.auth.project_id.clone())
            .with_cache_duration(Duration::from_secs(config.auth.jwks_cache_secs)),
    ));

    let run_inference = Arc::new(RunInferenceHandler::new(
        user_store.clone() as Arc<dyn UserReader>,
        metric_store.clone() as Arc<dyn MetricReader>,
        predictor,
    ));
    let record_metric = Arc::new(RecordMetricHandler::new(
        metric_store.clone() as Arc<dyn MetricRepository>,
    ));
    let list_metrics = Arc::new(ListMetricsHandler::new(
        metric_store.clone() as Arc<dyn MetricReader>,
    ));
    let register_user = Arc::new(RegisterUserHandler::new(
        user_store.clone() as Arc<dyn UserRepository>,
    ));
    let get_profile = Arc::new(GetProfileHandler::new(
        user_store.clone() as Arc<dyn UserReader>,
    ));

    let app = Router::new()
        .nest(
            "/api/inference",
            inference_routes(InferenceHandlers::new(run_inference)),
        )
        .nest(
            "/api/metrics",
            metric_routes(MetricHandlers::new(
                record_metric,
                list_metrics,
                get_profile.clone(),
            )),
        )
        .nest(
            "/api/users",
            user_routes(UserHandlers::new(register_user, get_profile)),
        )
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<_> = origins
            .iter()
            .filter_map(|o| o.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
