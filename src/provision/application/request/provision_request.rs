use crate::core::domain::model::image::ImageType;

/// Everything the provisioning pipeline needs besides the session.
///
/// Front ends (interactive prompts, flags, library callers) fill this in
/// before the pipeline starts; no field is requested mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Search string used to locate the target storage container.
    pub container_search: String,
    /// Name of the image to create.
    pub image_name: String,
    pub image_type: ImageType,
    /// URL the cluster downloads the image from.
    pub image_url: String,
    /// Name of the VM to create.
    pub vm_name: String,
}
