//! Telemetry initialization - tracing subscriber and request span setup.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::web;
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SERVICE_NAME: &str = "quill-api";

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name recorded on every request span.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            service_name: lookup("SERVICE_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,quill_infra=debug"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
}

/// Root span builder that tags each request span with the service name.
///
/// The name comes from the `web::Data<TelemetryConfig>` registered on the
/// app, so every event logged while serving a request carries it.
pub struct ServiceRootSpan;

impl RootSpanBuilder for ServiceRootSpan {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let service = service_name(request);
        tracing_actix_web::root_span!(request, service = %service)
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

fn service_name(request: &ServiceRequest) -> String {
    request
        .app_data::<web::Data<TelemetryConfig>>()
        .map(|config| config.service_name.clone())
        .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use tracing_actix_web::TracingLogger;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> TelemetryConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TelemetryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(!config.json_logs);
        assert_eq!(config.service_name, "quill-api");
    }

    #[test]
    fn test_json_format_and_service_name() {
        let config = config_from(&[("LOG_FORMAT", "JSON"), ("SERVICE_NAME", "quill-blue")]);
        assert!(config.json_logs);
        assert_eq!(config.service_name, "quill-blue");

        let config = config_from(&[("LOG_FORMAT", "pretty"), ("SERVICE_NAME", "  ")]);
        assert!(!config.json_logs);
        assert_eq!(config.service_name, "quill-api");
    }

    #[test]
    fn test_request_span_reads_registered_service_name() {
        let config = TelemetryConfig {
            service_name: "quill-blue".to_string(),
            ..TelemetryConfig::default()
        };
        let request = actix_test::TestRequest::default()
            .app_data(web::Data::new(config))
            .to_srv_request();
        assert_eq!(service_name(&request), "quill-blue");

        let bare = actix_test::TestRequest::default().to_srv_request();
        assert_eq!(service_name(&bare), "quill-api");
    }

    #[actix_web::test]
    async fn test_service_root_span_wraps_requests() {
        let app = actix_test::init_service(
            App::new()
                .wrap(TracingLogger::<ServiceRootSpan>::new())
                .app_data(web::Data::new(TelemetryConfig::default()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
