use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use prometheus::{Encoder, Registry, TextEncoder};

use crate::error::{Error, Result};

#[derive(Clone)]
struct AppState {
    registry: Registry,
    endpoint: Arc<str>,
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    // Gathering shells out to the LXC tools, keep it off the async workers.
    let registry = state.registry.clone();
    let families = match tokio::task::spawn_blocking(move || registry.gather()).await {
        Ok(families) => families,
        Err(err) => {
            log::error!("Failed to gather metrics: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to gather metrics").into_response();
        }
    };

    let encoder = TextEncoder::new();
    let mut body = Vec::new();
    if let Err(err) = encoder.encode(&families, &mut body) {
        log::error!("Failed to encode metrics: {}", err);
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
        body,
    )
        .into_response()
}

async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html><head><title>LXC Exporter</title></head>\
         <body><h1>LXC metrics</h1><p><a href=\"{}\">Metrics</a></p></body></html>",
        state.endpoint
    ))
}

/// HTTP front end serving a registry in the Prometheus text format.
pub struct MetricsServer {
    router: axum::Router,
}

impl MetricsServer {
    /// Serves `registry` under `endpoint`, with a landing page at `/`.
    pub fn new(registry: Registry, endpoint: &str) -> Self {
        let state = AppState {
            registry,
            endpoint: endpoint.into(),
        };
        let mut router = axum::Router::new().route(endpoint, get(render_metrics));
        if endpoint != "/" {
            router = router.route("/", get(landing_page));
        }
        Self {
            router: router.with_state(state),
        }
    }

    pub fn router(&self) -> axum::Router {
        self.router.clone()
    }

    /// Binds `addr` and serves until the process exits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound and
    /// [`Error::Serve`] if the server stops with an I/O error.
    pub async fn listen(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind {
                address: addr.to_owned(),
                source,
            })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(Error::Serve)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::exporter::{Descriptors, Exporter};
    use crate::observer::testing::RecordingObserver;
    use crate::runtime::testing::FakeRuntime;

    fn server(endpoint: &str) -> MetricsServer {
        let runtime = FakeRuntime::with_listing("101\n").with_info(101, "BlkIO use: 8192\n");
        let exporter = Exporter::new(
            Arc::new(Descriptors::new().unwrap()),
            runtime,
            RecordingObserver::default(),
        );
        let registry = Registry::new();
        registry.register(Box::new(exporter)).unwrap();
        MetricsServer::new(registry, endpoint)
    }

    async fn get_body(router: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let (status, content_type, body) = get_body(server("/metrics").router(), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(prometheus::TEXT_FORMAT));
        assert!(body.contains("lxc_up 1\n"), "{body}");
        assert!(body.contains("lxc_io{id=\"101\"} 8192\n"), "{body}");
    }

    #[tokio::test]
    async fn test_custom_endpoint_and_landing_page() {
        let router = server("/lxc").router();
        let (status, _, body) = get_body(router.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<a href=\"/lxc\">Metrics</a>"), "{body}");

        let (status, _, _) = get_body(router.clone(), "/lxc").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = get_body(router, "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_endpoint_serves_metrics() {
        let (status, _, body) = get_body(server("/").router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("lxc_up 1\n"), "{body}");
    }
}
