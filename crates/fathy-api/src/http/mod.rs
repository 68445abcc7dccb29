//! HTTP routes.
//!
//! - Operation routes bound from the endpoint table
//! - System listing and status
//! - Static touch interface

pub mod routes;
pub mod system;

pub(crate) mod dispatch;
pub(crate) mod static_files;
