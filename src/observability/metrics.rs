use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token refresh metrics
    pub refresh_requests: IntCounterVec,
    pub refresh_failures: IntCounterVec,
    pub refresh_duration: HistogramVec,

    // Sub-service metrics
    pub api_requests: IntCounterVec,
    pub api_failures: IntCounterVec,
    pub api_duration: HistogramVec,

    // Config
    pub parse_failures: IntCounter,
    pub config_validation_errors: IntCounter,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("seraph".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Refresh
            refresh_requests: IntCounterVec::new(Opts::new("token_refresh_requests_total", "Total token refresh attempts by token type"), &["token_type"]).unwrap(),
            refresh_failures: IntCounterVec::new(Opts::new("token_refresh_failures_total", "Token refresh failures by reason"), &["token_type", "reason"]).unwrap(),
            refresh_duration: HistogramVec::new(HistogramOpts::new("token_refresh_duration_seconds", "Token refresh duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["token_type"]).unwrap(),

            // Sub-services
            api_requests: IntCounterVec::new(Opts::new("api_requests_total", "Total sub-service requests"), &["service", "operation"]).unwrap(),
            api_failures: IntCounterVec::new(Opts::new("api_failures_total", "Sub-service request failures by reason"), &["service", "operation", "reason"]).unwrap(),
            api_duration: HistogramVec::new(HistogramOpts::new("api_request_duration_seconds", "Sub-service request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["service"]).unwrap(),

            // Config
            parse_failures: IntCounter::new("config_parse_failures_total", "Config parse failures").unwrap(),
            config_validation_errors: IntCounter::new("config_validation_errors_total", "Validation errors while loading config").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.refresh_requests.clone())).unwrap();
        reg.register(Box::new(metrics.refresh_failures.clone())).unwrap();
        reg.register(Box::new(metrics.refresh_duration.clone())).unwrap();
        reg.register(Box::new(metrics.api_requests.clone())).unwrap();
        reg.register(Box::new(metrics.api_failures.clone())).unwrap();
        reg.register(Box::new(metrics.api_duration.clone())).unwrap();
        reg.register(Box::new(metrics.parse_failures.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();

        metrics
    }

    /// Prometheus text exposition of every registered metric.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if encoder.encode(&self.registry.gather(), &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
