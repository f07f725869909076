use crate::domain::ports::{ConfigProvider, Console};
use crate::utils::error::{CatalogError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FOREST_SIZE: usize = 10;

/// 每次執行示範時使用的設定快照
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub seed: Option<u64>,
    pub simulate_latency: bool,
    pub latency_scale: f64,
    pub scratch_dir: PathBuf,
    pub forest_size: usize,
    pub inputs: HashMap<String, Vec<String>>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed: None,
            simulate_latency: true,
            latency_scale: 1.0,
            scratch_dir: PathBuf::from("."),
            forest_size: DEFAULT_FOREST_SIZE,
            inputs: HashMap::new(),
        }
    }
}

impl DemoSettings {
    /// 從任何 ConfigProvider 建立設定，`demo_names` 決定要讀取哪些腳本輸入
    pub fn from_provider<'n>(
        provider: &dyn ConfigProvider,
        demo_names: impl IntoIterator<Item = &'n str>,
    ) -> Self {
        let inputs = demo_names
            .into_iter()
            .filter_map(|name| {
                let answers = provider.scripted_input(name);
                (!answers.is_empty()).then(|| (name.to_string(), answers))
            })
            .collect();

        Self {
            seed: provider.seed(),
            simulate_latency: provider.simulate_latency(),
            latency_scale: provider.latency_scale(),
            scratch_dir: PathBuf::from(provider.scratch_dir()),
            forest_size: provider.forest_size(),
            inputs,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_latency(mut self) -> Self {
        self.simulate_latency = false;
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn with_forest_size(mut self, forest_size: usize) -> Self {
        self.forest_size = forest_size;
        self
    }

    pub fn with_inputs<I, S>(mut self, demo: &str, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.insert(
            demo.to_string(),
            answers.into_iter().map(Into::into).collect(),
        );
        self
    }
}

/// A demo's view of the outside world: where it prints, where answers come
/// from, its random source and its notion of waiting.
pub struct DemoContext<'a> {
    console: &'a mut dyn Console,
    rng: StdRng,
    scripted: VecDeque<String>,
    settings: DemoSettings,
}

impl<'a> DemoContext<'a> {
    pub fn new(console: &'a mut dyn Console, settings: DemoSettings) -> Self {
        Self::for_demo(console, settings, "")
    }

    pub fn for_demo(console: &'a mut dyn Console, settings: DemoSettings, demo: &str) -> Self {
        let rng = match settings.seed {
            Some(seed) => {
                tracing::debug!("🎲 Seeding RNG for '{}' with {}", demo, seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let scripted = settings
            .inputs
            .get(demo)
            .map(|answers| answers.iter().cloned().collect())
            .unwrap_or_default();

        Self {
            console,
            rng,
            scripted,
            settings,
        }
    }

    pub fn say(&mut self, line: impl AsRef<str>) {
        self.console.print(line.as_ref());
    }

    pub fn write(&mut self, text: impl AsRef<str>) {
        self.console.write(text.as_ref());
    }

    pub fn blank(&mut self) {
        self.console.print("");
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        if let Some(answer) = self.scripted.pop_front() {
            tracing::debug!("⌨️ Scripted answer for '{}': {}", question.trim(), answer);
            // 模擬終端機上看到的樣子
            self.console.write(question);
            self.console.print(&answer);
            return Ok(answer);
        }
        self.console.prompt(question)
    }

    pub fn ask_parsed<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(question)?;
        answer
            .trim()
            .parse::<T>()
            .map_err(|e| CatalogError::InvalidInput {
                prompt: question.trim().to_string(),
                value: answer.clone(),
                reason: e.to_string(),
            })
    }

    pub fn pause(&mut self, duration: Duration) {
        if !self.settings.simulate_latency {
            return;
        }
        let scaled = duration.mul_f64(self.settings.latency_scale);
        tracing::debug!("⏳ Simulated latency: {:?}", scaled);
        std::thread::sleep(scaled);
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.settings.scratch_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;

    #[test]
    fn test_scripted_answers_come_before_console() {
        let mut console = BufferConsole::with_answers(["from-console"]);
        let settings = DemoSettings::default().with_inputs("demo", ["scripted"]);
        let mut ctx = DemoContext::for_demo(&mut console, settings, "demo");

        assert_eq!(ctx.ask("First: ").unwrap(), "scripted");
        assert_eq!(ctx.ask("Second: ").unwrap(), "from-console");
        assert!(ctx.ask("Third: ").is_err());
        drop(ctx);

        assert_eq!(console.lines(), ["First: scripted", "Second: from-console"]);
    }

    #[test]
    fn test_ask_parsed_reports_invalid_input() {
        let mut console = BufferConsole::with_answers(["abc"]);
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());

        let err = ctx.ask_parsed::<u32>("Count: ").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { .. }));
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut first = BufferConsole::new();
        let mut second = BufferConsole::new();
        let settings = DemoSettings::default().with_seed(7);

        let mut a = DemoContext::new(&mut first, settings.clone());
        let rolls_a: Vec<u32> = (0..5).map(|_| a.roll(1..=10)).collect();
        let mut b = DemoContext::new(&mut second, settings);
        let rolls_b: Vec<u32> = (0..5).map(|_| b.roll(1..=10)).collect();

        assert_eq!(rolls_a, rolls_b);
    }
}
