pub mod catalog;
pub mod console;
pub mod context;
pub mod runner;

pub use crate::domain::model::{Category, DemoInfo, RunOutcome, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Console, Demo};
pub use crate::utils::error::Result;
