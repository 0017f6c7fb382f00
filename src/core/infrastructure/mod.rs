pub mod api_client;
pub mod prism_api;
