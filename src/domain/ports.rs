use crate::core::context::DemoContext;
use crate::domain::model::DemoInfo;
use crate::utils::error::Result;

/// 示範輸出與輸入的唯一通道
pub trait Console {
    /// Prints `line` followed by a newline.
    fn print(&mut self, line: &str);
    /// Prints `text` without a newline.
    fn write(&mut self, text: &str);
    /// Shows `question` and returns the answer without its trailing newline.
    fn prompt(&mut self, question: &str) -> Result<String>;
    fn lines_printed(&self) -> usize;
}

pub trait ConfigProvider {
    fn seed(&self) -> Option<u64>;
    fn simulate_latency(&self) -> bool;
    fn latency_scale(&self) -> f64;
    fn scratch_dir(&self) -> &str;
    fn forest_size(&self) -> usize;
    fn scripted_input(&self, demo: &str) -> Vec<String>;
}

pub trait Demo: Send + Sync {
    fn info(&self) -> DemoInfo;
    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()>;
}
