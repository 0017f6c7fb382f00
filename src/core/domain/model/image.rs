//! Models for the `/images` endpoints.

use serde::{Deserialize, Serialize};

/// Kind of image being imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    DiskImage,
    IsoImage,
}

impl ImageType {
    /// Maps a typed menu selection: an integer equal to `1` is a disk image,
    /// any other integer an ISO.
    ///
    /// Surrounding whitespace, a leading sign and leading zeros are accepted,
    /// and the value may be arbitrarily large. Returns `None` when the input
    /// is not an integer at all.
    pub fn parse_selection(input: &str) -> Option<Self> {
        let input = input.trim();
        let (negative, digits) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        if !negative && digits.trim_start_matches('0') == "1" {
            Some(ImageType::DiskImage)
        } else {
            Some(ImageType::IsoImage)
        }
    }
}

/// Where the image is fetched from and stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageImportSpec {
    pub storage_container_uuid: String,
    pub url: String,
}

/// Body of `POST /images`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportImageRequest {
    pub image_import_spec: ImageImportSpec,
    pub image_type: ImageType,
    pub name: String,
}

impl ImportImageRequest {
    pub fn new(
        container_id: impl Into<String>,
        name: impl Into<String>,
        source_url: impl Into<String>,
        image_type: ImageType,
    ) -> Self {
        Self {
            image_import_spec: ImageImportSpec {
                storage_container_uuid: container_id.into(),
                url: source_url.into(),
            },
            image_type,
            name: name.into(),
        }
    }
}

/// Image descriptor from `GET /images/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageInfo {
    /// Identifier of the virtual disk backing the image; cloned into new VMs.
    pub vm_disk_id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_type: Option<ImageType>,
    #[serde(default)]
    pub image_state: Option<String>,
    #[serde(default)]
    pub storage_container_uuid: Option<String>,
    #[serde(default)]
    pub vm_disk_size: Option<u64>,
}
