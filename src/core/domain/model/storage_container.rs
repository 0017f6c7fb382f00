//! Models for the `/storage_containers` search endpoint.

use serde::Deserialize;

/// Paging metadata returned with every v2.0 list response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListMetadata {
    /// Number of entities matching the query.
    pub count: u64,
    #[serde(default)]
    pub grand_total_entities: Option<u64>,
    #[serde(default)]
    pub total_entities: Option<u64>,
}

/// A storage container entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageContainer {
    pub storage_container_uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cluster_uuid: Option<String>,
}

/// Response of `GET /storage_containers?search_string=...`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StorageContainerList {
    pub metadata: ListMetadata,
    #[serde(default)]
    pub entities: Vec<StorageContainer>,
}
