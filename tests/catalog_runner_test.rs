use anyhow::Result;
use pattern_catalog::{
    BufferConsole, Catalog, CatalogError, Category, Demo, DemoRunner, DemoSettings, RunOutcome,
};

#[test]
fn test_catalogue_covers_every_category() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 39);

    let count = |category| catalog.by_category(category).len();
    assert_eq!(count(Category::Creational), 11);
    assert_eq!(count(Category::Structural), 10);
    assert_eq!(count(Category::Behavioral), 18);
}

#[test]
fn test_listing_serializes_to_json() -> Result<()> {
    let catalog = Catalog::builtin();
    let json = serde_json::to_value(catalog.list())?;

    let first = &json[0];
    assert_eq!(first["category"], "creational");
    assert!(first["name"].is_string());
    assert!(first["interactive"].is_boolean());
    Ok(())
}

#[test]
fn test_unknown_selector() {
    let catalog = Catalog::builtin();
    let err = catalog.select("does-not-exist").err();
    assert!(matches!(err, Some(CatalogError::UnknownDemo { .. })));
}

#[test]
fn test_run_all_non_interactive_demos() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let catalog = Catalog::builtin();
    let demos: Vec<&dyn Demo> = catalog.iter().filter(|d| !d.info().interactive).collect();

    let settings = DemoSettings::default()
        .with_seed(2024)
        .without_latency()
        .with_forest_size(2)
        .with_scratch_dir(temp_dir.path());
    let runner = DemoRunner::new(settings);

    let mut console = BufferConsole::new();
    let summaries = runner.run_all(&demos, &mut console);

    assert_eq!(summaries.len(), demos.len());
    for summary in &summaries {
        assert_eq!(summary.outcome, RunOutcome::Completed, "{}", summary.name);
        assert!(summary.lines_printed > 0, "{}", summary.name);
    }
    assert!(console.contains("=== Visitor :: visitor-xml ==="));
    Ok(())
}

#[test]
fn test_interactive_demo_fails_cleanly_without_input() {
    let catalog = Catalog::builtin();
    let runner = DemoRunner::new(DemoSettings::default().without_latency());
    let mut console = BufferConsole::new();

    for name in ["chain-middleware", "iterator-social", "strategy-payment", "template-method-network"] {
        let demo = catalog.find(name).map(|d| runner.run(d, &mut console));
        let summary = demo.expect("catalogued");
        assert!(
            matches!(&summary.outcome, RunOutcome::Failed { error } if error.contains("No more input")),
            "{}",
            name
        );
    }
}

#[test]
fn test_seed_makes_runs_repeatable() -> Result<()> {
    let catalog = Catalog::builtin();
    let mut transcripts = Vec::new();

    for _ in 0..2 {
        let runner = DemoRunner::new(DemoSettings::default().with_seed(99).without_latency())
            .with_banner(false);
        let mut console = BufferConsole::new();
        for name in ["flyweight-forest", "abstract-factory-gui"] {
            if let Some(demo) = catalog.find(name) {
                runner.run(demo, &mut console);
            }
        }
        transcripts.push(console.transcript());
    }

    assert_eq!(transcripts[0], transcripts[1]);
    Ok(())
}
