//! HTTP route definitions.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::ApiError;
use crate::http::system::{self, SYSTEM_LIST_PATH, SYSTEM_STATUS_PATH, TALK_TO_FATHY_PATH};
use crate::http::{dispatch, static_files};
use crate::proxy;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// GET      /                       - Touch interface (index.html)
/// GET      /favicon.ico            - Favicon, 204 when absent
/// GET      /static/*               - Static assets
///
/// GET      /api/system/list        - Bound endpoints
/// GET      /api/system/status      - Server status
///
/// GET|POST /api/<module>/<op>      - One route per endpoint binding
/// POST     /api/robot_functions/talk_to_fathy/execute
///                                  - Speech proxy (multipart audio)
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let speech_route: MethodRouter<Arc<AppState>> = post(proxy::talk_to_fathy_s2s)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes));

    let mut router = Router::new()
        .route("/", get(static_files::index))
        .route("/favicon.ico", get(static_files::favicon))
        .route(SYSTEM_LIST_PATH, get(system::list_endpoints))
        .route(SYSTEM_STATUS_PATH, get(system::system_status));

    let max_body = state.max_body_bytes;
    let mut speech_route_installed = false;
    for binding in state.endpoints.iter() {
        let method_router = if binding.path == TALK_TO_FATHY_PATH {
            speech_route_installed = true;
            get(dispatch::handle)
                .layer(DefaultBodyLimit::max(max_body))
                .merge(speech_route.clone())
        } else {
            get(dispatch::handle)
                .post(dispatch::handle)
                .layer(DefaultBodyLimit::max(max_body))
        };
        debug!("Routing {}", binding.path);
        router = router.route(&binding.path, method_router);
    }
    if !speech_route_installed {
        router = router.route(TALK_TO_FATHY_PATH, speech_route);
    }

    if state.static_dir.is_dir() {
        router = router.nest_service("/static", ServeDir::new(&state.static_dir));
    }

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
