//! Endpoint path derivation.

/// Prefix shared by every module endpoint.
pub const API_PREFIX: &str = "/api";

/// Derive the endpoint path of an operation.
///
/// `robot_functions/basic_tour` + `execute` → `/api/robot_functions/basic_tour/execute`.
pub fn endpoint_path(module_path: &str, operation: &str) -> String {
    format!("{}/{}/{}", API_PREFIX, module_path.trim_matches('/'), operation)
}
