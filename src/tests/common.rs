use crate::{PrismClient, ProvisionRequest};
use std::time::Duration;
use wiremock::MockServer;

pub(crate) const API: &str = "/PrismGateway/services/rest/v2.0";

/// A client pointed at `mock_server` over plain http, polling without delay.
pub(crate) fn create_test_client(mock_server: &MockServer) -> PrismClient {
    let address = mock_server.address();
    PrismClient::builder()
        .host(address.ip().to_string())
        .port(address.port())
        .credentials("admin", "nutanix/4u")
        .secure(false)
        .poll_interval(Duration::ZERO)
        .build()
        .unwrap()
}

pub(crate) fn api_path(suffix: &str) -> String {
    format!("{}/{}", API, suffix.trim_start_matches('/'))
}

pub(crate) fn sample_request(image_type: crate::ImageType) -> ProvisionRequest {
    ProvisionRequest {
        container_search: "ctr".to_string(),
        image_name: "ubuntu-22.04".to_string(),
        image_type,
        image_url: "http://mirror.example.com/ubuntu.iso".to_string(),
        vm_name: "web-01".to_string(),
    }
}
