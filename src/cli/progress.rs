use indicatif::{ProgressBar, ProgressStyle};
use prism_vm_provision::{ProgressReporter, Stage, TaskOutcome};
use std::io::Write;

const RULE_WIDTH: usize = 79;

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{msg} {percent:>3}%|{bar:40}| {pos}/{len} [{elapsed_precise}<{eta}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▉▊▋▌▍▎▏ ")
}

/// Renders each task as a 0-100 progress bar, with the stage banner and the
/// job verdict written to `out`.
///
/// A bar still running when the reporter is dropped is abandoned in place.
pub struct TerminalReporter<W: Write + Send> {
    out: W,
    bar: Option<ProgressBar>,
    hidden: bool,
}

impl<W: Write + Send> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar: None,
            hidden: false,
        }
    }

    /// Same lines on `out`, but the bar itself is never drawn.
    #[cfg(test)]
    pub fn hidden(out: W) -> Self {
        Self {
            out,
            bar: None,
            hidden: true,
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.bar.is_some()
    }

    /// Leaves the current bar where it stopped, if there is one.
    pub fn abandon(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }

    fn line(&mut self, text: &str) {
        // Losing a status line must not abort the job.
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write + Send> ProgressReporter for TerminalReporter<W> {
    fn begin(&mut self, stage: Stage) {
        self.abandon();
        self.line(&format!("Initiating {}...please wait", stage));
        let bar = if self.hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(100)
        };
        bar.set_length(100);
        bar.set_style(bar_style());
        bar.set_message(match stage {
            Stage::ImageImport => "Uploading…",
            Stage::VmCreation => "Creating…",
        });
        self.bar = Some(bar);
    }

    fn advance(&mut self, delta: u32) {
        if let Some(bar) = &self.bar {
            bar.inc(u64::from(delta));
        }
    }

    fn finish(&mut self, outcome: &TaskOutcome) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
        if outcome.is_success() {
            self.line("The job completed successfully");
        } else {
            self.line("The job did not complete successfully");
        }
        self.line(&"=".repeat(RULE_WIDTH));
    }
}

impl<W: Write + Send> Drop for TerminalReporter<W> {
    fn drop(&mut self) {
        self.abandon();
    }
}
