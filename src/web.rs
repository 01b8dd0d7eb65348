use crate::{
    config::ServerConfig,
    posts::{SearchRequest, SearchResponse},
    semantic::{PostSearchService, SearchError},
};
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const WELCOME_MESSAGE: &str = "Welcome to the Post Search API";

#[derive(Clone)]
struct SharedState {
    service: PostSearchService,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("failed to install Ctrl+C handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => log::error!("failed to install signal handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::warn!("shutting down");
}

/// Any origin, method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so the request's own
/// values are mirrored back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn router(service: PostSearchService, body_limit_bytes: usize) -> Router {
    let shared_state = Arc::new(SharedState { service });

    Router::new()
        .route("/", get(root))
        .route("/search", post(search))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(
                    tower_http::trace::TraceLayer::new_for_http()
                        .make_span_with(
                            tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                        )
                        .on_response(
                            tower_http::trace::DefaultOnResponse::new()
                                .level(tracing::Level::INFO),
                        ),
                )
                .layer(cors_layer()),
        )
        .with_state(shared_state)
}

async fn start_app(service: PostSearchService, server: ServerConfig) -> anyhow::Result<()> {
    log::info!("serving searches with model '{}'", service.model_name());
    let app = router(service, server.body_limit_bytes);

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn start_daemon(service: PostSearchService, server: ServerConfig) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async { start_app(service, server).await })
}

#[derive(Debug)]
struct HttpError(SearchError);

// Tell axum how to convert `SearchError` into a response.
impl IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        log::error!("{self:?}");
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": self.0.to_string()})),
        )
            .into_response()
    }
}

// This enables using `?` on anything that converts into `SearchError`.
impl<E> From<E> for HttpError
where
    E: Into<SearchError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn search(
    State(state): State<Arc<SharedState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, HttpError> {
    log::debug!("search request with {} posts", payload.posts.len());

    let service = state.service.clone();

    tokio::task::block_in_place(move || {
        service
            .search(&payload)
            .map(Into::into)
            .map_err(Into::into)
    })
}
