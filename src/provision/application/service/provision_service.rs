use crate::{
    core::{
        domain::{
            error::{PrismError, PrismResult},
            model::{client_config::ClientConfig, task::TaskOutcome},
        },
        infrastructure::prism_api::PrismApi,
    },
    provision::application::{
        request::provision_request::ProvisionRequest,
        response::provision_outcome::ProvisionOutcome,
    },
    task::application::{
        progress::{ProgressReporter, Stage},
        service::task_monitor::TaskMonitor,
    },
};
use tracing::{info, warn};

/// Runs container lookup, image import and VM creation in sequence.
///
/// Each stage only starts if the previous one produced a usable result.
/// Nothing is rolled back: an imported image stays if VM creation fails.
pub struct ProvisionService<'a, A: PrismApi + ?Sized> {
    api: &'a A,
    monitor: TaskMonitor<'a, A>,
}

impl<'a, A: PrismApi + ?Sized> ProvisionService<'a, A> {
    pub fn new(api: &'a A, config: &ClientConfig) -> Self {
        Self {
            api,
            monitor: TaskMonitor::new(api, config),
        }
    }

    pub async fn execute(
        &self,
        request: &ProvisionRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> PrismResult<ProvisionOutcome> {
        let Some(container_id) = self.api.find_container(&request.container_search).await?
        else {
            warn!(search = %request.container_search, "no storage container matched");
            return Ok(ProvisionOutcome::ContainerNotFound {
                search: request.container_search.clone(),
            });
        };
        info!(%container_id, "resolved storage container");

        let import_task = self
            .api
            .import_image(
                &container_id,
                &request.image_name,
                &request.image_url,
                request.image_type,
            )
            .await?;
        info!(task_id = %import_task, image = %request.image_name, "image import submitted");

        let import_progress = match self
            .monitor
            .await_task(&import_task, Stage::ImageImport, reporter)
            .await?
        {
            TaskOutcome::Succeeded(progress) => progress,
            TaskOutcome::Failed(task) => {
                return Ok(ProvisionOutcome::ImageImportFailed { container_id, task });
            }
        };

        let image_id = import_progress.first_entity_id().ok_or_else(|| {
            PrismError::UnexpectedResponse(format!(
                "image import task {} succeeded without reporting an entity",
                import_task
            ))
        })?;
        let image = self.api.get_image(image_id).await?;
        info!(%image_id, vm_disk_id = %image.vm_disk_id, "image imported");

        let vm_task = self
            .api
            .create_vm(&image.vm_disk_id, &container_id, &request.vm_name)
            .await?;
        info!(task_id = %vm_task, vm = %request.vm_name, "VM creation submitted");

        match self
            .monitor
            .await_task(&vm_task, Stage::VmCreation, reporter)
            .await?
        {
            TaskOutcome::Succeeded(vm_task) => Ok(ProvisionOutcome::Completed {
                container_id,
                image,
                vm_task,
            }),
            TaskOutcome::Failed(task) => Ok(ProvisionOutcome::VmCreationFailed {
                container_id,
                image,
                task,
            }),
        }
    }
}
