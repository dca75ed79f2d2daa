use serde::{Deserialize, Serialize};

/// Report returned once the remote stress workload has run to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressReport {
    pub matrix_operations: u64,
    pub device: String,
}

/// View state for the stress panel.
///
/// Two schedules write here while a run is live: a one-second cosmetic
/// countdown owning `remaining_secs`, and the network call owning the
/// terminal transition. Completion is decided by the network response alone;
/// the countdown reaching zero changes nothing but the displayed text.
#[derive(Debug, Clone, Default)]
pub struct StressRun {
    pub running: bool,
    pub duration_secs: u32,
    pub remaining_secs: u32,
    pub report: Option<StressReport>,
    pub error: Option<String>,
}

impl StressRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run of `duration_secs`, clearing the previous report. Returns
    /// false and leaves everything untouched while a run is already live.
    pub fn start(&mut self, duration_secs: u32) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.report = None;
        self.error = None;
        true
    }

    /// One countdown step. Returns true when the caller should cancel its
    /// interval: either the countdown just expired or the run is already
    /// over and the tick is stale.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return true;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs == 0
    }

    /// Store the report of the current run and end it. A response arriving
    /// after the run already ended is discarded.
    pub fn resolve(&mut self, report: StressReport) {
        if !self.running {
            return;
        }
        self.report = Some(report);
        self.running = false;
        self.remaining_secs = 0;
    }

    pub fn fail(&mut self, error: String) {
        if !self.running {
            return;
        }
        self.error = Some(error);
        self.running = false;
        self.remaining_secs = 0;
    }

    /// Countdown hit zero but the service has not answered yet.
    pub fn awaiting_report(&self) -> bool {
        self.running && self.remaining_secs == 0
    }

    pub fn countdown(&self) -> String {
        format_countdown(self.remaining_secs)
    }
}

/// Zero-padded MM:SS.
pub fn format_countdown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
