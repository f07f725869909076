use anyhow::Context as _;
use clap::Parser;
use pattern_catalog::config::{Command, LogFormat};
use pattern_catalog::utils::error::ErrorSeverity;
use pattern_catalog::utils::{logger, validation::Validate};
use std::collections::HashSet;

use pattern_catalog::{
    Catalog, CatalogError, CliConfig, Demo, DemoInfo, DemoRunner, DemoSettings, TerminalConsole,
};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting pattern-catalog CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    if let Err(e) = config.load_file_config().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let catalog = Catalog::builtin();
    match config.command.clone() {
        Command::List { category, json } => {
            let infos: Vec<DemoInfo> = catalog
                .list()
                .into_iter()
                .filter(|info| category.map_or(true, |c| info.category == c))
                .collect();
            if json {
                let listing =
                    serde_json::to_string_pretty(&infos).context("Failed to serialize listing")?;
                println!("{}", listing);
            } else {
                print_table(&infos);
            }
        }
        Command::Show { name } => match catalog.find(&name) {
            Some(demo) => print_details(&demo.info()),
            None => exit_with(&CatalogError::UnknownDemo { name }),
        },
        Command::Run {
            selectors,
            all,
            category,
        } => {
            let demos = match resolve(&catalog, &selectors, all, category) {
                Ok(demos) => demos,
                Err(e) => exit_with(&e),
            };
            run_demos(&config, &demos);
        }
    }

    Ok(())
}

fn resolve<'c>(
    catalog: &'c Catalog,
    selectors: &[String],
    all: bool,
    category: Option<pattern_catalog::Category>,
) -> pattern_catalog::Result<Vec<&'c dyn Demo>> {
    if all {
        return Ok(catalog.iter().collect());
    }
    if let Some(category) = category {
        return Ok(catalog.by_category(category));
    }

    let mut wanted = HashSet::new();
    for selector in selectors {
        for demo in catalog.select(selector)? {
            wanted.insert(demo.info().name);
        }
    }
    // 依目錄順序執行，同一個示範只跑一次
    Ok(catalog
        .iter()
        .filter(|demo| wanted.contains(demo.info().name))
        .collect())
}

fn run_demos(config: &CliConfig, demos: &[&dyn Demo]) {
    let settings = DemoSettings::from_provider(config, demos.iter().map(|d| d.info().name));
    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let runner = DemoRunner::new_with_monitoring(settings, monitor_enabled);
    let mut console = TerminalConsole::with_answers(config.input.clone());
    let summaries = runner.run_all(demos, &mut console);

    let failed: Vec<_> = summaries.iter().filter(|s| !s.is_success()).collect();
    if failed.is_empty() {
        tracing::info!("✅ All {} demos completed", summaries.len());
        return;
    }

    for summary in &failed {
        eprintln!("❌ {} failed", summary.name);
    }
    // 示範本身失敗視為處理錯誤
    std::process::exit(1);
}

fn print_table(infos: &[DemoInfo]) {
    println!("{:<26} {:<24} {:<11} SUMMARY", "NAME", "PATTERN", "CATEGORY");
    for info in infos {
        let name = if info.interactive {
            format!("{} *", info.name)
        } else {
            info.name.to_string()
        };
        println!(
            "{:<26} {:<24} {:<11} {}",
            name,
            info.pattern,
            info.category.as_str(),
            info.summary
        );
    }
    println!();
    println!("{} demos (* prompts for input)", infos.len());
}

fn print_details(info: &DemoInfo) {
    println!("Name:        {}", info.name);
    println!("Pattern:     {}", info.pattern);
    println!("Category:    {}", info.category);
    println!("Interactive: {}", if info.interactive { "yes" } else { "no" });
    println!("Summary:     {}", info.summary);
}

fn exit_with(e: &CatalogError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
