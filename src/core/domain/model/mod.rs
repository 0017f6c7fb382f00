pub mod client_config;
pub mod image;
pub mod prism_connection;
pub mod storage_container;
pub mod task;
pub mod vm;
