use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStat {
    pub total_gb: f64,
    pub used_gb: f64,
    pub percent: f64,
}

/// One poll of the host's RAM and disk usage. No history is kept; each
/// sample fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSample {
    pub ram: UsageStat,
    pub disk: UsageStat,
}

/// View state for the live resource monitor.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    pub sample: Option<ResourceSample>,
    pub connected: bool,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poll answered. Later arrivals overwrite earlier ones regardless of
    /// which tick issued them.
    pub fn apply(&mut self, sample: ResourceSample) {
        self.sample = Some(sample);
        self.connected = true;
    }

    /// A poll failed. The stale sample stays on display and polling
    /// continues untouched.
    pub fn poll_failed(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ram_percent: f64) -> ResourceSample {
        ResourceSample {
            ram: UsageStat {
                total_gb: 32.0,
                used_gb: 12.8,
                percent: ram_percent,
            },
            disk: UsageStat {
                total_gb: 931.5,
                used_gb: 400.2,
                percent: 43.0,
            },
        }
    }

    #[test]
    fn test_apply_overwrites_previous_sample() {
        let mut state = MonitorState::new();
        state.apply(sample(40.0));
        state.apply(sample(55.0));
        assert_eq!(state.sample.as_ref().unwrap().ram.percent, 55.0);
        assert!(state.connected);
    }

    #[test]
    fn test_poll_failure_retains_sample() {
        let mut state = MonitorState::new();
        state.apply(sample(40.0));
        state.poll_failed();
        assert!(!state.connected);
        assert_eq!(state.sample, Some(sample(40.0)));

        // A later successful poll recovers.
        state.apply(sample(41.0));
        assert!(state.connected);
    }

    #[test]
    fn test_starts_disconnected_without_sample() {
        let state = MonitorState::new();
        assert!(state.sample.is_none());
        assert!(!state.connected);
    }

    #[test]
    fn test_parses_service_payload() {
        let json = r#"{
            "ram": {"total_gb": 31.9, "used_gb": 14.2, "percent": 44.5},
            "disk": {"total_gb": 475.7, "used_gb": 210.0, "percent": 44.1}
        }"#;
        let s: ResourceSample = serde_json::from_str(json).unwrap();
        assert_eq!(s.ram.total_gb, 31.9);
        assert_eq!(s.disk.percent, 44.1);
    }
}
