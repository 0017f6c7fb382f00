pub mod args;
pub mod progress;
pub mod prompt;

use anyhow::{Context, Result};
use args::Args;
use prism_vm_provision::{PrismClient, ProvisionOutcome, ProvisionRequest};
use progress::TerminalReporter;
use std::io::Write;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so prompts, the progress bar and results own stdout.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prompts for missing values and runs the pipeline, writing progress to `out`.
pub async fn run<W: Write + Send>(args: Args, out: &mut W) -> Result<ProvisionOutcome> {
    let inputs = prompt::collect(&args)?;

    let client = PrismClient::builder()
        .host(inputs.host)
        .port(args.port)
        .credentials(inputs.username, inputs.password)
        .accept_invalid_certs(!args.verify_tls)
        .poll_interval(Duration::from_secs(args.poll_interval_secs))
        .poll_timeout(args.timeout_secs.map(Duration::from_secs))
        .build()
        .context("invalid connection settings")?;

    let mut reporter = TerminalReporter::new(out);
    provision(&client, &inputs.request, &mut reporter).await
}

async fn provision<W: Write + Send>(
    client: &PrismClient,
    request: &ProvisionRequest,
    reporter: &mut TerminalReporter<W>,
) -> Result<ProvisionOutcome> {
    let outcome = client.provision(request, reporter).await;
    if outcome.is_err() {
        reporter.abandon();
    }
    Ok(outcome?)
}

/// Reports the result on `out` and returns the process exit code.
///
/// Every `ProvisionOutcome` is a normal stop and exits 0; an error is printed
/// with its causes and exits 1.
pub fn finish_run<W: Write>(result: Result<ProvisionOutcome>, out: &mut W) -> u8 {
    match result {
        Ok(outcome) => {
            report(&outcome, out);
            0
        }
        Err(e) => {
            let _ = writeln!(out, "{:#}", e);
            1
        }
    }
}

pub fn report<W: Write>(outcome: &ProvisionOutcome, out: &mut W) {
    match outcome {
        ProvisionOutcome::ContainerNotFound { .. } => {
            let _ = writeln!(out, "The container you're looking for does not exist!");
        }
        ProvisionOutcome::ImageImportFailed { task, .. } => {
            info!(status = %task.progress_status, "image import did not succeed, VM not created");
        }
        ProvisionOutcome::VmCreationFailed { image, task, .. } => {
            info!(vm_disk_id = %image.vm_disk_id, status = %task.progress_status, "VM creation did not succeed");
        }
        ProvisionOutcome::Completed { vm_task, .. } => {
            info!(vm = ?vm_task.first_entity_id(), "VM created");
        }
    }
}
