//! API route declarations (e.g., /api/v1/*)

pub mod files_routes;
pub mod logs_routes;
pub mod stats_routes;
pub mod system_routes;
