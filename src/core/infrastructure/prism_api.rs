//! The remote operations the provisioning workflow depends on.

use crate::core::{
    domain::{
        error::{PrismError, PrismResult},
        model::{
            image::{ImageInfo, ImageType, ImportImageRequest},
            storage_container::StorageContainerList,
            task::{TaskProgress, TaskReference},
            vm::CreateVmRequest,
        },
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use tracing::debug;
use url::form_urlencoded;

/// One call on the Prism v2.0 API per method.
///
/// `ApiClient` is the HTTP implementation; services take any `PrismApi`
/// so they can be driven without a cluster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrismApi: Send + Sync {
    /// Resolves a container search string to the first match's identifier.
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn find_container(&self, name: &str) -> PrismResult<Option<String>>;

    /// Submits an image import and returns the task identifier.
    async fn import_image(
        &self,
        container_id: &str,
        name: &str,
        source_url: &str,
        image_type: ImageType,
    ) -> PrismResult<String>;

    /// Fetches an image descriptor.
    async fn get_image(&self, image_id: &str) -> PrismResult<ImageInfo>;

    /// Submits the fixed VM template and returns the task identifier.
    async fn create_vm(&self, disk_id: &str, container_id: &str, name: &str)
    -> PrismResult<String>;

    /// Fetches the current progress record of a task.
    async fn get_task(&self, task_id: &str) -> PrismResult<TaskProgress>;
}

fn encode(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

#[async_trait]
impl PrismApi for ApiClient {
    async fn find_container(&self, name: &str) -> PrismResult<Option<String>> {
        let list: StorageContainerList = self
            .get(&format!("storage_containers?search_string={}", encode(name)))
            .await?;

        if list.metadata.count == 0 {
            debug!(search = name, "no storage container matched");
            return Ok(None);
        }

        // Server order is kept: the first entity wins.
        list.entities
            .into_iter()
            .next()
            .map(|container| Some(container.storage_container_uuid))
            .ok_or_else(|| {
                PrismError::UnexpectedResponse(format!(
                    "container search reported {} match(es) but returned no entities",
                    list.metadata.count
                ))
            })
    }

    async fn import_image(
        &self,
        container_id: &str,
        name: &str,
        source_url: &str,
        image_type: ImageType,
    ) -> PrismResult<String> {
        let request = ImportImageRequest::new(container_id, name, source_url, image_type);
        let task: TaskReference = self.post("images", &request).await?;
        Ok(task.task_uuid)
    }

    async fn get_image(&self, image_id: &str) -> PrismResult<ImageInfo> {
        self.get(&format!("images/{}", encode(image_id))).await
    }

    async fn create_vm(
        &self,
        disk_id: &str,
        container_id: &str,
        name: &str,
    ) -> PrismResult<String> {
        let request = CreateVmRequest::cdrom_boot(name, disk_id, container_id);
        let task: TaskReference = self.post("vms/", &request).await?;
        Ok(task.task_uuid)
    }

    async fn get_task(&self, task_id: &str) -> PrismResult<TaskProgress> {
        self.get(&format!(
            "tasks/{}?include_subtasks_info=false",
            encode(task_id)
        ))
        .await
    }
}
