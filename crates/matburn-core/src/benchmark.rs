use serde::{Deserialize, Serialize};

/// Response of the one-shot matrix benchmark.
///
/// `cuda` is absent when the service found no usable accelerator; the
/// hardware names are best-effort and may be missing as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub cpu: f64,
    #[serde(default)]
    pub cuda: Option<f64>,
    #[serde(default)]
    pub cpu_name: Option<String>,
    #[serde(default)]
    pub gpu_name: Option<String>,
    pub summary: String,
}

impl BenchmarkResult {
    /// Slowest timing of the run, the reference both bars are scaled against.
    pub fn max_time(&self) -> f64 {
        self.cpu.max(self.cuda.unwrap_or(0.0))
    }

    pub fn cpu_bar_percent(&self) -> f64 {
        Self::bar_percent(self.cpu, self.max_time())
    }

    pub fn accel_bar_percent(&self) -> f64 {
        Self::bar_percent(self.cuda.unwrap_or(0.0), self.max_time())
    }

    fn bar_percent(value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return 0.0;
        }
        (value / max * 100.0).clamp(0.0, 100.0)
    }

    pub fn cpu_label(&self) -> &str {
        self.cpu_name.as_deref().unwrap_or("CPU_HOST")
    }

    pub fn accel_label(&self) -> &str {
        self.gpu_name.as_deref().unwrap_or("GPU_DEVICE")
    }

    pub fn cpu_time_label(&self) -> String {
        format!("{:.2}s", self.cpu)
    }

    /// Accelerated timing in seconds, or "N/A" when no accelerator ran.
    pub fn accel_time_label(&self) -> String {
        match self.cuda {
            Some(secs) => format!("{:.2}s", secs),
            None => "N/A".to_string(),
        }
    }
}

/// View state for the benchmark panel.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRun {
    pub running: bool,
    pub result: Option<BenchmarkResult>,
    pub error: Option<String>,
}

impl BenchmarkRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run, clearing the previous outcome. Returns false and leaves
    /// everything untouched while a run is already in flight.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.result = None;
        self.error = None;
        true
    }

    /// Store the response of the current run. A response arriving after the
    /// run already ended is discarded.
    pub fn resolve(&mut self, result: BenchmarkResult) {
        if !self.running {
            return;
        }
        self.result = Some(result);
        self.running = false;
    }

    pub fn fail(&mut self, error: String) {
        if !self.running {
            return;
        }
        self.error = Some(error);
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(cpu: f64, cuda: Option<f64>) -> BenchmarkResult {
        BenchmarkResult {
            cpu,
            cuda,
            cpu_name: None,
            gpu_name: None,
            summary: String::new(),
        }
    }

    #[test]
    fn test_slower_timing_renders_full_width() {
        let r = result(4.0, Some(1.0));
        assert_eq!(r.cpu_bar_percent(), 100.0);
        assert_eq!(r.accel_bar_percent(), 25.0);

        let r = result(1.0, Some(4.0));
        assert_eq!(r.cpu_bar_percent(), 25.0);
        assert_eq!(r.accel_bar_percent(), 100.0);
    }

    #[test]
    fn test_bar_percent_stays_in_range() {
        for (cpu, cuda) in [(0.001, Some(120.0)), (9.5, Some(9.5)), (3.0, None)] {
            let r = result(cpu, cuda);
            assert!((0.0..=100.0).contains(&r.cpu_bar_percent()));
            assert!((0.0..=100.0).contains(&r.accel_bar_percent()));
        }
    }

    #[test]
    fn test_missing_accelerator_degrades_gracefully() {
        let r = result(3.2, None);
        assert_eq!(r.accel_bar_percent(), 0.0);
        assert_eq!(r.accel_time_label(), "N/A");
        assert_eq!(r.cpu_bar_percent(), 100.0);
    }

    #[test]
    fn test_zero_timings_do_not_divide_by_zero() {
        let r = result(0.0, None);
        assert_eq!(r.cpu_bar_percent(), 0.0);
        assert_eq!(r.accel_bar_percent(), 0.0);
    }

    #[test]
    fn test_label_fallbacks() {
        let mut r = result(1.0, Some(0.5));
        assert_eq!(r.cpu_label(), "CPU_HOST");
        assert_eq!(r.accel_label(), "GPU_DEVICE");

        r.cpu_name = Some("Ryzen 9 7950X".to_string());
        r.gpu_name = Some("RTX 4090".to_string());
        assert_eq!(r.cpu_label(), "Ryzen 9 7950X");
        assert_eq!(r.accel_label(), "RTX 4090");
    }

    #[test]
    fn test_start_is_single_flight() {
        let mut run = BenchmarkRun::new();
        assert!(run.start());
        assert!(!run.start());
        assert!(run.running);
    }

    #[test]
    fn test_start_clears_previous_outcome() {
        let mut run = BenchmarkRun::new();
        run.start();
        run.resolve(result(2.0, None));
        assert!(run.result.is_some());

        run.start();
        assert!(run.result.is_none());
        assert!(run.error.is_none());
    }

    #[test]
    fn test_fail_leaves_result_unset() {
        let mut run = BenchmarkRun::new();
        run.start();
        run.fail("connection refused".to_string());
        assert!(!run.running);
        assert!(run.result.is_none());
        assert_eq!(run.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut run = BenchmarkRun::new();
        run.start();
        run.resolve(result(2.0, Some(1.0)));

        run.resolve(result(9.0, None));
        assert_eq!(run.result.as_ref().unwrap().cpu, 2.0);

        run.fail("late failure".to_string());
        assert!(run.error.is_none());
    }

    #[test]
    fn test_parses_service_payload() {
        let json = r#"{
            "cpu": 4.0,
            "cuda": 1.0,
            "cpu_name": "AMD Ryzen 7 5800X",
            "gpu_name": "NVIDIA GeForce RTX 3080",
            "summary": "4x speedup"
        }"#;
        let r: BenchmarkResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.cuda, Some(1.0));
        assert_eq!(r.summary, "4x speedup");
    }

    #[test]
    fn test_parses_payload_without_accelerator() {
        let json = r#"{"cpu": 7.25, "cuda": null, "summary": "CPU only"}"#;
        let r: BenchmarkResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.cuda, None);
        assert_eq!(r.cpu_name, None);
        assert_eq!(r.accel_time_label(), "N/A");
    }
}
