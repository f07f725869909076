use anyhow::{Context, Result};
use pattern_catalog::{BufferConsole, Catalog, DemoRunner, DemoSettings, RunOutcome, RunSummary};

fn run_with_inputs(name: &str, answers: &[&str]) -> Result<(RunSummary, BufferConsole)> {
    let catalog = Catalog::builtin();
    let demo = catalog.find(name).context("demo not catalogued")?;
    let settings = DemoSettings::default()
        .with_seed(5)
        .without_latency()
        .with_inputs(name, answers.iter().copied());
    let runner = DemoRunner::new(settings).with_banner(false);

    let mut console = BufferConsole::new();
    let summary = runner.run(demo, &mut console);
    Ok((summary, console))
}

fn run_demo(name: &str) -> Result<BufferConsole> {
    let (summary, console) = run_with_inputs(name, &[])?;
    assert!(summary.is_success(), "{} failed: {:?}", name, summary.outcome);
    Ok(console)
}

#[test]
fn test_middleware_admin_login() -> Result<()> {
    let (summary, console) =
        run_with_inputs("chain-middleware", &["admin@example.com", "admin_pass"])?;
    assert!(summary.is_success());
    assert!(console.contains("Hello, admin!"));
    assert_eq!(
        console.lines().last().map(String::as_str),
        Some("Authorization have been successful!")
    );
    Ok(())
}

#[test]
fn test_middleware_throttles_then_runs_out_of_input() -> Result<()> {
    let (summary, console) =
        run_with_inputs("chain-middleware", &["x@y", "p", "x@y", "p", "x@y", "p"])?;
    assert!(!summary.is_success());
    assert!(console.contains("This email is not registered!"));
    assert!(console.contains("Request limit excedeed!"));
    Ok(())
}

#[test]
fn test_garage_chain() -> Result<()> {
    let console = run_demo("chain-garage")?;
    assert_eq!(&console.lines()[..4], ["Added oil", "Added fuel", "Added water", "Car is good to go"]);
    assert_eq!(
        console.lines().iter().filter(|l| *l == "Car is good to go").count(),
        4
    );
    Ok(())
}

#[test]
fn test_screen_commands_undo_in_reverse() -> Result<()> {
    let console = run_demo("command-screen")?;
    assert_eq!(
        console.lines(),
        ["Hello world", "Hello", " worldHello", "Hello", "Hello world"]
    );
    Ok(())
}

#[test]
fn test_editor_commands() -> Result<()> {
    let console = run_demo("command-editor")?;
    assert!(console.contains("Text pasted, new text: Hi my name is Rafael Cassau! Rafael Cassau!"));
    assert!(console.contains("Text pasted, new text:  Rafael Cassau!Hi my name is"));
    assert_eq!(
        console.lines().iter().rev().nth(1).map(String::as_str),
        Some("undo, new text: Hi my name is")
    );
    Ok(())
}

#[test]
fn test_interpreter_rules() -> Result<()> {
    let console = run_demo("interpreter-rules")?;
    let expected = [
        "False", "False", "True", "False", "False", "True", "True", "True", "False", "False",
        "False", "False", "True", "True", "True",
    ];
    assert_eq!(console.lines(), expected);
    Ok(())
}

#[test]
fn test_social_spammer_on_linkedin() -> Result<()> {
    let (summary, console) = run_with_inputs("iterator-social", &["2"])?;
    assert!(summary.is_success());
    assert!(console.contains("LinkedIn: Loading \"friends\" list of anna.smith@bing.com over the network..."));
    assert!(console.contains("Sent message to: catwoman@yahoo.com."));
    assert!(console.contains("Sent message to: sam@amazon.com."));
    Ok(())
}

#[test]
fn test_mediator_components() -> Result<()> {
    let console = run_demo("mediator-components")?;
    assert_eq!(
        &console.lines()[..4],
        [
            "Client triggers operation A.",
            "Component 1 does A.",
            "Mediator reacts on A and triggers following operations:",
            "Component 2 does C.",
        ]
    );
    Ok(())
}

#[test]
fn test_memento_demos() -> Result<()> {
    let caretaker = run_demo("memento-caretaker")?;
    let restores = caretaker
        .lines()
        .iter()
        .filter(|l| l.starts_with("Caretaker: Restoring state to:"))
        .count();
    assert_eq!(restores, 2);

    let undoable = run_demo("memento-undoable")?;
    let lines = undoable.lines();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]");
    assert_eq!(lines[1], lines[0]);
    assert_eq!(lines[2], "[0, 1, 2, 3, 4, 5, 6, 7, 8]");
    assert_eq!(lines[10], "[0]");
    Ok(())
}

#[test]
fn test_observer_demos() -> Result<()> {
    let editor = run_demo("observer-editor")?;
    assert!(editor.contains("Please open a file first."));
    assert!(editor.contains("Save to log file.text: Someone has performed open"));
    assert!(editor.contains("Email to admin@example.com: Someone has performed save"));

    let stock = run_demo("observer-stock")?;
    assert!(stock.contains("American stock market received: important update"));
    assert!(stock.contains("European stock market received: important update"));
    Ok(())
}

#[test]
fn test_state_player_script() -> Result<()> {
    let console = run_demo("state-player")?;
    let lines = console.lines();
    assert_eq!(lines.len(), 34);
    assert_eq!(lines[0], "Playing Track 1");
    assert_eq!(lines[11], "Playing Track 12");
    assert_eq!(lines[12], "Paused...");
    assert_eq!(lines[15], "Playing Track 12");
    assert_eq!(lines[26], "Playing Track 1");
    assert_eq!(lines[27], "Stop playing");
    assert_eq!(&lines[31..], ["Ready", "Playing Track 1", "Stop playing"]);
    Ok(())
}

#[test]
fn test_computer_state_table() -> Result<()> {
    let console = run_demo("state-computer")?;
    assert_eq!(
        console.lines(),
        [
            "off",
            "Current: off -> switching to new state: on.",
            "Current: on -> switching to new state: suspend.",
            "Current: suspend -> switching to: hibernate, not possible.",
            "Current: suspend -> switching to new state: on.",
            "Current: on -> switching to new state: off.",
        ]
    );
    Ok(())
}

#[test]
fn test_shop_pays_by_card() -> Result<()> {
    let (summary, console) = run_with_inputs(
        "strategy-payment",
        &["1", "2", "N", "2", "4111", "12/29", "123", "P"],
    )?;
    assert!(summary.is_success());
    assert!(console.contains("Pay 4400 units or Continue shopping? P/C: P"));
    assert!(console.contains("Paying 4400 using Credit Card."));
    assert!(console.contains("Payment has been successful."));
    Ok(())
}

#[test]
fn test_shop_rejects_count_that_overflows_total() -> Result<()> {
    let (summary, console) = run_with_inputs(
        "strategy-payment",
        &["1", "18446744073709551615", "N", "2", "4111", "12/29", "123", "P"],
    )?;
    assert!(
        matches!(&summary.outcome, RunOutcome::Failed { error } if error.contains("order total is too large")),
        "{:?}",
        summary.outcome
    );
    assert!(!console.contains("Payment has been successful."));
    Ok(())
}

#[test]
fn test_primes() -> Result<()> {
    let console = run_demo("strategy-primes")?;
    let standard = console.position("StandardPrimeFinder").context("second finder")?;
    assert_eq!(console.lines()[0], "HardcodedPrimeFinder");
    assert_eq!(standard, 16);
    assert_eq!(console.lines().last().map(String::as_str), Some("97"));
    Ok(())
}

#[test]
fn test_network_post_and_unknown_choice() -> Result<()> {
    let (summary, console) =
        run_with_inputs("template-method-network", &["jane", "secret", "hello", "1"])?;
    assert!(summary.is_success());
    assert!(console.contains("Password: ******"));
    assert!(console.contains("..........Login success on Facebook."));
    assert!(console.contains("User: jane was logged out from Facebook."));

    let (summary, _) =
        run_with_inputs("template-method-network", &["jane", "secret", "hello", "3"])?;
    assert!(!summary.is_success());
    Ok(())
}

#[test]
fn test_meals() -> Result<()> {
    let console = run_demo("template-method-meal")?;
    assert_eq!(console.lines().len(), 4);
    assert!(console.lines()[0].starts_with("Prepare Pizza"));
    assert!(console.lines()[3].starts_with("Cook Cake"));
    Ok(())
}

#[test]
fn test_visitor_exports_two_documents() -> Result<()> {
    let console = run_demo("visitor-xml")?;
    let headers = console
        .lines()
        .iter()
        .filter(|l| l.starts_with("<?xml"))
        .count();
    assert_eq!(headers, 2);
    assert!(console.contains("        <radius>10</radius>"));
    assert!(console.contains("    <compound_shape>"));
    Ok(())
}
