//! Client for the Nutanix Prism Element v2.0 REST API, scoped to one workflow:
//! import an image into a storage container, then boot a new VM from it.

mod core;
mod provision;
mod task;


pub use crate::core::domain::error::{PrismError, PrismResult, ValidationError};
pub use crate::core::domain::model::{
    client_config::{ClientConfig, DEFAULT_POLL_INTERVAL, RateLimitConfig},
    image::{ImageInfo, ImageType},
    prism_connection::PrismConnection,
    task::{EntityReference, TaskOutcome, TaskProgress, TaskStatus},
    vm::CreateVmRequest,
};
pub use crate::core::domain::value_object::{
    DEFAULT_PRISM_PORT, PRISM_API_PATH, PrismHost, PrismPassword, PrismPort, PrismUrl,
    PrismUsername,
};
pub use crate::core::infrastructure::prism_api::PrismApi;
pub use crate::provision::application::{
    request::provision_request::ProvisionRequest,
    response::provision_outcome::ProvisionOutcome,
};
pub use crate::task::application::progress::{ProgressReporter, SilentReporter, Stage};

use crate::{
    core::{
        domain::value_object::{
            validate_host, validate_password, validate_port, validate_username,
        },
        infrastructure::api_client::ApiClient,
    },
    provision::application::service::provision_service::ProvisionService,
    task::application::service::task_monitor::TaskMonitor,
};
use std::time::Duration;

/// A client bound to one Prism Element cluster.
///
/// Building the client performs no network call; credentials are checked by
/// the cluster on the first request.
///
/// # Examples
///
/// ```no_run
/// use prism_vm_provision::{ImageType, PrismClient, PrismResult, ProvisionRequest, SilentReporter};
///
/// #[tokio::main]
/// async fn main() -> PrismResult<()> {
///     let client = PrismClient::builder()
///         .host("10.0.0.15")
///         .credentials("admin", "secret")
///         .build()?;
///
///     let request = ProvisionRequest {
///         container_search: "default".to_string(),
///         image_name: "ubuntu".to_string(),
///         image_type: ImageType::IsoImage,
///         image_url: "http://mirror.example.com/ubuntu.iso".to_string(),
///         vm_name: "web-01".to_string(),
///     };
///     let outcome = client.provision(&request, &mut SilentReporter).await?;
///     println!("{:?}", outcome);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct PrismClient {
    api_client: ApiClient,
    config: ClientConfig,
}

/// Builder for PrismClient configuration
#[derive(Debug)]
pub struct PrismClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    secure: bool,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl Default for PrismClientBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            username: None,
            password: None,
            secure: true,
            accept_invalid_certs: true,
            config: ClientConfig::default(),
        }
    }
}

impl PrismClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Gateway port, 9440 unless set.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Use https (default) or plain http.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Skip TLS certificate validation. On by default, clusters usually ship self-signed certs.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn poll_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.poll_timeout = timeout;
        self
    }

    pub fn rate_limit(mut self, rate_limit: Option<RateLimitConfig>) -> Self {
        self.config.rate_limit = rate_limit;
        self
    }

    /// Validates the settings and creates the client.
    ///
    /// # Errors
    ///
    /// Returns `PrismError::Validation` if the host, username or password is
    /// missing or malformed, the port is 0, or the rate limit has a zero field.
    pub fn build(self) -> PrismResult<PrismClient> {
        let host = self.host.ok_or_else(|| ValidationError::missing("host"))?;
        validate_host(&host)?;

        let port = self.port.unwrap_or(DEFAULT_PRISM_PORT);
        validate_port(port)?;

        let username = self
            .username
            .ok_or_else(|| ValidationError::missing("username"))?;
        validate_username(&username)?;

        let password = self
            .password
            .ok_or_else(|| ValidationError::missing("password"))?;
        validate_password(&password)?;

        let host = PrismHost::new_unchecked(host);
        let port = PrismPort::new_unchecked(port);
        let url = PrismUrl::from_parts(&host, port, self.secure)?;

        let connection = PrismConnection::new(
            host,
            port,
            PrismUsername::new_unchecked(username),
            PrismPassword::new_unchecked(password),
            self.secure,
            self.accept_invalid_certs,
            url,
        );

        let api_client = ApiClient::new(connection, &self.config)?;

        Ok(PrismClient {
            api_client,
            config: self.config,
        })
    }
}

impl PrismClient {
    /// Creates a new builder for PrismClient configuration
    pub fn builder() -> PrismClientBuilder {
        PrismClientBuilder::default()
    }

    /// Returns the connection details of this client
    pub fn connection(&self) -> &PrismConnection {
        self.api_client.connection()
    }

    /// Returns the polling and rate limit settings of this client
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves a storage container search string to the first match's identifier.
    ///
    /// Matches are taken in the order the cluster returns them. `Ok(None)`
    /// means nothing matched, which callers should treat as "nothing to do".
    pub async fn find_container(&self, name: &str) -> PrismResult<Option<String>> {
        self.api_client.find_container(name).await
    }

    /// Submits an image import into `container_id` and returns its task identifier.
    ///
    /// The URL is not checked locally; an unreachable source shows up as a
    /// failed task.
    pub async fn import_image(
        &self,
        container_id: &str,
        name: &str,
        source_url: &str,
        image_type: ImageType,
    ) -> PrismResult<String> {
        self.api_client
            .import_image(container_id, name, source_url, image_type)
            .await
    }

    /// Fetches an image descriptor.
    pub async fn get_image(&self, image_id: &str) -> PrismResult<ImageInfo> {
        self.api_client.get_image(image_id).await
    }

    /// Creates a VM from the fixed template (2 vCPU, 2048 MB, CD-ROM boot on
    /// IDE 0 cloned from `disk_id`) and returns its task identifier.
    pub async fn create_vm(
        &self,
        disk_id: &str,
        container_id: &str,
        name: &str,
    ) -> PrismResult<String> {
        self.api_client.create_vm(disk_id, container_id, name).await
    }

    /// Fetches the current progress record of a task.
    pub async fn get_task(&self, task_id: &str) -> PrismResult<TaskProgress> {
        self.api_client.get_task(task_id).await
    }

    /// Polls a task until it reaches 100%, reporting progress deltas.
    ///
    /// `reporter.begin(stage)` is called before the first poll. A task that
    /// finishes with any status other than `Succeeded` is returned as
    /// `TaskOutcome::Failed`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a poll fails or the configured poll timeout elapses.
    pub async fn await_task(
        &self,
        task_id: &str,
        stage: Stage,
        reporter: &mut dyn ProgressReporter,
    ) -> PrismResult<TaskOutcome> {
        TaskMonitor::new(&self.api_client, &self.config)
            .await_task(task_id, stage, reporter)
            .await
    }

    /// Runs the whole workflow: find container, import image, create VM.
    pub async fn provision(
        &self,
        request: &ProvisionRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> PrismResult<ProvisionOutcome> {
        ProvisionService::new(&self.api_client, &self.config)
            .execute(request, reporter)
            .await
    }
}
