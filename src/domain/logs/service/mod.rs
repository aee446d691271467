pub mod line_parser;
pub mod log_aggregator;
pub mod log_reader;
pub mod log_service;
