#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// One reading taken after a demo finished.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct DemoSample {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub samples_taken: usize,
    pub uptime: Duration,
}

#[cfg(feature = "cli")]
struct Probe {
    system: System,
    peak_memory_mb: u64,
    samples_taken: usize,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    probe: Option<(Pid, Mutex<Probe>)>,
    started: Instant,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let probe = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => {
                    let mut system = System::new();
                    system.refresh_all();
                    Some((
                        pid,
                        Mutex::new(Probe {
                            system,
                            peak_memory_mb: 0,
                            samples_taken: 0,
                        }),
                    ))
                }
                Err(e) => {
                    tracing::warn!("⚠️ Cannot resolve current PID, monitoring disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            probe,
            started: Instant::now(),
        }
    }

    pub fn sample(&self) -> Option<DemoSample> {
        let (pid, probe) = self.probe.as_ref()?;
        let mut probe = probe.lock().ok()?;
        probe.system.refresh_all();

        let (cpu_usage, memory_mb) = {
            let process = probe.system.process(*pid)?;
            (process.cpu_usage(), process.memory() / 1024 / 1024)
        };
        probe.peak_memory_mb = probe.peak_memory_mb.max(memory_mb);
        probe.samples_taken += 1;

        Some(DemoSample {
            cpu_usage,
            memory_mb,
            peak_memory_mb: probe.peak_memory_mb,
            samples_taken: probe.samples_taken,
            uptime: self.started.elapsed(),
        })
    }

    pub fn log_stats(&self, demo: &str) {
        if let Some(sample) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB",
                demo,
                sample.cpu_usage,
                sample.memory_mb,
                sample.peak_memory_mb
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(sample) = self.sample() {
            tracing::info!(
                "📊 Final Stats - {} demos sampled in {:?}, Peak Memory: {}MB",
                sample.samples_taken - 1,
                sample.uptime,
                sample.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.probe.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 沒有 cli feature 時不做任何監控
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _demo: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_takes_no_samples() {
        let monitor = SystemMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.sample().is_none());
    }
}
