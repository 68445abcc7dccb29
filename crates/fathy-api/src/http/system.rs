//! System routes.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

pub const SYSTEM_NAME: &str = "Fathy Robot Control System";
pub const SYSTEM_LIST_PATH: &str = "/api/system/list";
pub const SYSTEM_STATUS_PATH: &str = "/api/system/status";

/// Paths no module operation may bind to.
pub const RESERVED_PATHS: &[&str] = &[SYSTEM_LIST_PATH, SYSTEM_STATUS_PATH];

/// `POST` on this path is the speech proxy, not the generic dispatcher.
pub const TALK_TO_FATHY_PATH: &str = "/api/robot_functions/talk_to_fathy/execute";

const SERVER_NAME: &str = "axum (tokio)";

#[derive(Debug, Serialize)]
pub struct EndpointList {
    pub total_endpoints: usize,
    pub endpoints: Vec<String>,
    pub system: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub system: &'static str,
    pub status: &'static str,
    pub api_modules: usize,
    pub server: &'static str,
}

/// List every bound endpoint in registration order.
pub(crate) async fn list_endpoints(State(state): State<Arc<AppState>>) -> Json<EndpointList> {
    Json(EndpointList {
        total_endpoints: state.endpoints.len(),
        endpoints: state.endpoints.paths(),
        system: SYSTEM_NAME,
        status: "active",
    })
}

pub(crate) async fn system_status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(SystemStatus {
        system: SYSTEM_NAME,
        status: "running",
        api_modules: state.endpoints.len(),
        server: SERVER_NAME,
    })
}
