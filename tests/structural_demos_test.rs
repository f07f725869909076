use anyhow::{Context, Result};
use pattern_catalog::{BufferConsole, Catalog, DemoRunner, DemoSettings};
use tempfile::TempDir;

fn run_with(name: &str, settings: DemoSettings) -> Result<BufferConsole> {
    let catalog = Catalog::builtin();
    let demo = catalog.find(name).context("demo not catalogued")?;
    let runner = DemoRunner::new(settings).with_banner(false);

    let mut console = BufferConsole::new();
    let summary = runner.run(demo, &mut console);
    assert!(summary.is_success(), "{} failed: {:?}", name, summary.outcome);
    Ok(console)
}

fn quiet() -> DemoSettings {
    DemoSettings::default().with_seed(11).without_latency()
}

#[test]
fn test_socket_adapter() -> Result<()> {
    let console = run_with("adapter-sockets", quiet())?;
    assert!(console.contains("Kettle on fire!"));
    assert!(console.contains("Coffee time!"));
    Ok(())
}

#[test]
fn test_decorator_writes_into_scratch_dir() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let console = run_with(
        "decorator-data-source",
        quiet().with_scratch_dir(temp_dir.path()),
    )?;

    let written = std::fs::read_to_string(temp_dir.path().join("output_demo.txt"))?;
    assert!(!written.is_empty());
    assert!(!written.contains("John Smith"));

    let decoded = console.position("- Decoded").context("decoded section")?;
    assert!(console.lines()[decoded + 1].starts_with("Name,Salary\nJohn Smith"));
    Ok(())
}

#[test]
fn test_facade_conversion_order() -> Result<()> {
    let console = run_with("facade-video", quiet())?;
    assert_eq!(
        console.lines(),
        [
            "VideoConversionFacade: conversion started.",
            "CodecFactory: extracting ogg audio...",
            "BitrateReader: reading file...",
            "BitrateReader: writing file...",
            "AudioMixer: fixing audio...",
            "VideoConversionFacade: conversion completed.",
        ]
    );
    Ok(())
}

#[test]
fn test_flyweight_respects_forest_size() -> Result<()> {
    let console = run_with("flyweight-forest", quiet().with_forest_size(3))?;
    assert!(console.contains("6 trees drawn"));
    assert!(console.contains("+ TreeTypes size (~30 bytes) * 2"));
    Ok(())
}

#[test]
fn test_caching_proxy_hits_cache() -> Result<()> {
    let console = run_with("proxy-video-cache", quiet())?;
    assert!(console.contains("Retrieved list from cache."));
    assert!(console.contains("Retrieved video catzzzzzzzzz from cache."));
    assert!(console.contains("Time saved by caching proxy:"));
    Ok(())
}

#[test]
fn test_access_proxy_blocks_anonymous_writes() -> Result<()> {
    let console = run_with("proxy-access", quiet())?;
    assert_eq!(
        console.lines().last().map(String::as_str),
        Some("Only authorized users can write blog posts.")
    );
    Ok(())
}

#[test]
fn test_window_decorators_stack_outermost_first() -> Result<()> {
    let console = run_with("decorator-windows", quiet())?;
    assert_eq!(
        console.lines(),
        [
            "Building a window",
            "Adding border",
            "Building a window",
            "Adding vertical scroll bar",
            "Building a window",
            "Adding horizontal scroll bar",
            "Building a window",
            "Adding horizontal scroll bar",
            "Adding vertical scroll bar",
            "Adding border",
            "Building a window",
        ]
    );
    Ok(())
}
