pub mod log_search_request;
