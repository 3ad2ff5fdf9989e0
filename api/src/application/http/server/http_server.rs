use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::{
    PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle,
};
use scantry_core::{application::create_service, domain::common::ScantryConfig};
use scantry_core::infrastructure::identity::GoogleIdTokenVerifier;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::auth::Authenticator;
use crate::application::http::feedback::router::feedback_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::household::router::household_routes;
use crate::application::http::inventory::router::inventory_routes;
use crate::application::http::meal_log::router::meal_log_routes;
use crate::application::http::profile::router::profile_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::schedule::router::schedule_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::application::http::settings::router::settings_routes;
use crate::application::http::shopping_list::router::shopping_list_routes;
use crate::args::{Args, AuthMode};

/// The Prometheus recorder is process-global, so the layer is built once.
static METRICS: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> = OnceLock::new();

fn authenticator(args: &Args) -> Result<Authenticator, anyhow::Error> {
    match args.auth.auth_mode {
        AuthMode::Google => {
            let client_id = args
                .auth
                .google_client_id
                .as_deref()
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| anyhow::anyhow!("GOOGLE_CLIENT_ID is required when AUTH_MODE=google"))?;

            Ok(Authenticator::Google(GoogleIdTokenVerifier::new(client_id)))
        }
        AuthMode::TrustedHeader => {
            let header = args.auth.trusted_email_header.to_lowercase();
            HeaderName::from_bytes(header.as_bytes())?;
            warn!(
                header = %header,
                "trusting caller e-mail from a request header; the API must sit behind an authenticating proxy"
            );

            Ok(Authenticator::TrustedHeader(header))
        }
    }
}

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let authenticator = authenticator(&args)?;

    let config = ScantryConfig::from(args.as_ref().clone());
    info!(
        bucket = %config.object_storage.bucket_name(),
        backend = ?config.object_storage.backend,
        "configuring object storage"
    );
    let service = create_service(config).await?;

    Ok(AppState::new(args, service, authenticator))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let mut allowed_headers = vec![AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION];
    if let Authenticator::TrustedHeader(header) = &state.authenticator {
        allowed_headers.push(HeaderName::from_bytes(header.as_bytes())?);
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers(allowed_headers)
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = METRICS.get_or_init(PrometheusMetricLayer::pair).clone();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(household_routes(state.clone()))
        .merge(inventory_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(shopping_list_routes(state.clone()))
        .merge(schedule_routes(state.clone()))
        .merge(meal_log_routes(state.clone()))
        .merge(profile_routes(state.clone()))
        .merge(settings_routes(state.clone()))
        .merge(feedback_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
