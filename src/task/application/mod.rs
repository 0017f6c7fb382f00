pub mod progress;
pub mod service;
