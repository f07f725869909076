use crate::core::context::{DemoContext, DemoSettings};
use crate::domain::model::{RunOutcome, RunSummary};
use crate::domain::ports::{Console, Demo};
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

pub struct DemoRunner {
    settings: DemoSettings,
    monitor: SystemMonitor,
    banner: bool,
}

impl DemoRunner {
    pub fn new(settings: DemoSettings) -> Self {
        Self::new_with_monitoring(settings, false)
    }

    pub fn new_with_monitoring(settings: DemoSettings, enable_monitoring: bool) -> Self {
        Self {
            settings,
            monitor: SystemMonitor::new(enable_monitoring),
            banner: true,
        }
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    /// 執行單一示範；錯誤只會結束這個示範
    pub fn run(&self, demo: &dyn Demo, console: &mut dyn Console) -> RunSummary {
        let info = demo.info();
        tracing::info!("▶️ Running {} ({}, {})", info.name, info.pattern, info.category);

        if self.banner {
            console.print(&format!("=== {} :: {} ===", info.pattern, info.name));
        }

        let lines_before = console.lines_printed();
        let start_time = Instant::now();
        let result = {
            let mut ctx = DemoContext::for_demo(&mut *console, self.settings.clone(), info.name);
            demo.run(&mut ctx)
        };
        let elapsed = start_time.elapsed();

        if self.monitor.is_enabled() {
            self.monitor.log_stats(info.name);
        }

        let outcome = match result {
            Ok(()) => {
                tracing::info!("✅ {} completed in {:?}", info.name, elapsed);
                RunOutcome::Completed
            }
            Err(e) => {
                tracing::error!(
                    "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
                    info.name,
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                console.print(&format!("❌ {}", e.user_friendly_message()));
                RunOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        if self.banner {
            console.print("");
        }

        RunSummary {
            name: info.name.to_string(),
            lines_printed: console.lines_printed().saturating_sub(lines_before),
            elapsed,
            outcome,
        }
    }

    pub fn run_all(&self, demos: &[&dyn Demo], console: &mut dyn Console) -> Vec<RunSummary> {
        let summaries: Vec<RunSummary> = demos
            .iter()
            .map(|demo| self.run(*demo, &mut *console))
            .collect();

        let failed = summaries.iter().filter(|s| !s.is_success()).count();
        tracing::info!(
            "🏁 Ran {} demos, {} succeeded, {} failed",
            summaries.len(),
            summaries.len() - failed,
            failed
        );

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        summaries
    }
}
