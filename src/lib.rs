pub mod config;
pub mod core;
pub mod domain;
pub mod patterns;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::TerminalConsole, toml_config::TomlConfig};
pub use core::{
    catalog::Catalog,
    console::BufferConsole,
    context::{DemoContext, DemoSettings},
    runner::DemoRunner,
};
pub use domain::model::{Category, DemoInfo, RunOutcome, RunSummary};
pub use domain::ports::{ConfigProvider, Console, Demo};
pub use utils::error::{CatalogError, Result};
