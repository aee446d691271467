pub mod health_service;
pub mod metrics_service;
pub mod status_service;
