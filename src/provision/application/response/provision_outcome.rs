use crate::core::domain::model::{image::ImageInfo, task::TaskProgress};

/// How a provisioning run ended, short of an error.
///
/// None of these is a failure of the client itself: the non-`Completed`
/// variants are soft stops that skip the remaining stages.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionOutcome {
    /// No storage container matched the search string.
    ContainerNotFound { search: String },
    /// The image import task finished without success.
    ImageImportFailed {
        container_id: String,
        task: TaskProgress,
    },
    /// The image was imported but the VM creation task failed.
    VmCreationFailed {
        container_id: String,
        image: ImageInfo,
        task: TaskProgress,
    },
    /// Both tasks succeeded.
    Completed {
        container_id: String,
        image: ImageInfo,
        vm_task: TaskProgress,
    },
}

impl ProvisionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ProvisionOutcome::Completed { .. })
    }
}
