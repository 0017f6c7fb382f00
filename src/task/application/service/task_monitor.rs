use crate::{
    core::{
        domain::{
            error::{PrismError, PrismResult},
            model::{
                client_config::ClientConfig,
                task::{TaskOutcome, TaskProgress, TaskStatus},
            },
        },
        infrastructure::prism_api::PrismApi,
    },
    task::application::progress::{ProgressReporter, Stage},
};
use tokio::time::{Duration, Instant, sleep, timeout_at};
use tracing::{debug, warn};

/// Polls a task until it reaches 100% and classifies the result.
pub struct TaskMonitor<'a, A: PrismApi + ?Sized> {
    api: &'a A,
    poll_interval: Duration,
    poll_timeout: Option<Duration>,
}

impl<'a, A: PrismApi + ?Sized> TaskMonitor<'a, A> {
    pub fn new(api: &'a A, config: &ClientConfig) -> Self {
        Self {
            api,
            poll_interval: config.poll_interval,
            poll_timeout: config.poll_timeout,
        }
    }

    /// Waits for `task_id`, a task of `stage`, to complete.
    ///
    /// `reporter.begin(stage)` is called before the first poll. Every poll
    /// showing a higher percentage than the last one advances `reporter` by
    /// the difference; other polls are dropped. Once the task is at 100%, a
    /// `Succeeded` status yields `TaskOutcome::Succeeded` and anything else
    /// `TaskOutcome::Failed`.
    ///
    /// # Errors
    /// Propagates any API error, and returns `PrismError::Timeout` when a
    /// poll timeout is configured and elapses first. Neither the sleeps nor
    /// the polls run past that deadline.
    pub async fn await_task(
        &self,
        task_id: &str,
        stage: Stage,
        reporter: &mut dyn ProgressReporter,
    ) -> PrismResult<TaskOutcome> {
        let started = Instant::now();
        let deadline = self.poll_timeout.map(|limit| started + limit);

        reporter.begin(stage);

        let mut progress = self.poll(task_id, deadline, started).await?;
        let mut last = progress.percentage();
        debug!(task_id, percentage = last, status = %progress.progress_status, "polled task");
        if last > 0 {
            reporter.advance(last);
        }

        while last < 100 {
            match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Err(timed_out(task_id, started));
                    }
                    sleep(self.poll_interval.min(deadline - now)).await;
                }
                None => sleep(self.poll_interval).await,
            }

            progress = self.poll(task_id, deadline, started).await?;
            let current = progress.percentage();
            debug!(task_id, percentage = current, status = %progress.progress_status, "polled task");
            if current > last {
                reporter.advance(current - last);
                last = current;
            }
        }

        let outcome = if progress.progress_status == TaskStatus::Succeeded {
            TaskOutcome::Succeeded(progress)
        } else {
            warn!(task_id, status = %progress.progress_status, "task finished without success");
            TaskOutcome::Failed(progress)
        };
        reporter.finish(&outcome);
        Ok(outcome)
    }

    async fn poll(
        &self,
        task_id: &str,
        deadline: Option<Instant>,
        started: Instant,
    ) -> PrismResult<TaskProgress> {
        let Some(deadline) = deadline else {
            return self.api.get_task(task_id).await;
        };
        timeout_at(deadline, self.api.get_task(task_id))
            .await
            .unwrap_or_else(|_| Err(timed_out(task_id, started)))
    }
}

fn timed_out(task_id: &str, started: Instant) -> PrismError {
    PrismError::Timeout {
        task_id: task_id.to_string(),
        waited: started.elapsed(),
    }
}
