use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    handler::Handler,
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::redirects::{RedirectManifest, Resolution};

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const NO_CACHE: &str = "no-cache";
const MANIFEST_PATH: &str = "/_redirects";

pub struct AppState {
    dist_dir: PathBuf,
    manifest: RedirectManifest,
}

impl AppState {
    pub fn new(dist_dir: PathBuf, manifest: RedirectManifest) -> Self {
        AppState { dist_dir, manifest }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

/// The manifest configures the server; it is not part of the published site.
async fn hidden_manifest() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn router(state: Arc<AppState>) -> Router {
    let bundle = ServeDir::new(&state.dist_dir).fallback(apply_redirects.with_state(state.clone()));

    Router::new()
        .route("/api/health", get(health_check))
        .route(MANIFEST_PATH, any(hidden_manifest))
        .fallback_service(bundle)
        .layer(middleware::from_fn_with_state(state, forced_redirects))
        .layer(middleware::from_fn(cache_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Runs when no file in the bundle matched the request.
async fn apply_redirects(State(state): State<Arc<AppState>>, req: Request) -> Response {
    match state.manifest.resolve(req.uri().path()) {
        Some(resolution) => respond(&state, resolution, req).await,
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn forced_redirects(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    match state.manifest.resolve_forced(req.uri().path()) {
        Some(resolution) => respond(&state, resolution, req).await,
        None => next.run(req).await,
    }
}

async fn respond(state: &AppState, resolution: Resolution, req: Request) -> Response {
    match resolution {
        Resolution::Redirect { location, status } => {
            let location = match req.uri().query() {
                Some(query) if !location.contains('?') => format!("{location}?{query}"),
                _ => location,
            };
            tracing::debug!(from = %req.uri().path(), to = %location, "redirecting");
            match HeaderValue::from_str(&location) {
                Ok(location) => (status, [(header::LOCATION, location)]).into_response(),
                Err(_) => {
                    tracing::warn!(%location, "redirect target is not a valid header value");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
        Resolution::Rewrite { path, status } => {
            let mut relative = path.trim_start_matches('/').to_string();
            if relative.is_empty() || relative.ends_with('/') {
                relative.push_str("index.html");
            }
            let response = match ServeFile::new(state.dist_dir.join(relative)).oneshot(req).await {
                Ok(response) => response,
                Err(never) => match never {},
            };
            let mut response = response.into_response();
            if response.status().is_success() && status != StatusCode::OK {
                *response.status_mut() = status;
            }
            response
        }
    }
}

async fn cache_headers(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;
    if response.status().is_success() {
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if let Some(policy) = cache_policy(&path, content_type) {
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static(policy));
        }
    }
    response
}

/// Hashed bundle assets never change under the same name; the page shell must always be revalidated.
fn cache_policy(path: &str, content_type: &str) -> Option<&'static str> {
    if content_type.starts_with("text/html") {
        Some(NO_CACHE)
    } else if path.starts_with("/assets/") {
        Some(IMMUTABLE)
    } else {
        None
    }
}
