//! Basic usage example of the textdiff_core library
//!
//! Run with `RUST_LOG=textdiff_core=debug` to see engine events.

use textdiff_core::{compute_diff, render_patch, DiffConfig, DiffEngine, Granularity};
use tracing_subscriber::EnvFilter;

const LINE: &str = "----------------------------------------";

const ORIGINAL: &str = "The quick brown fox jumps over the lazy dog.
This is the first version of the text.
It contains some sample content for testing.
Lorem ipsum dolor sit amet.";

const MODIFIED: &str = "The quick brown fox leaps over the lazy cat.
This is the second version of the text.
It contains some sample content for testing purposes.
Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Text Diff Examples ===\n");

    example_character_diff()?;
    example_each_granularity()?;
    example_ignore_options()?;
    example_report()?;
    example_length_guard();

    Ok(())
}

fn example_character_diff() -> textdiff_core::Result<()> {
    println!("Example 1: Character Diff");
    println!("{}", LINE);

    let (result, stats) = compute_diff("cat", "cot", None)?;

    println!("Patch: {:?}", render_patch(&result));
    println!("Stats: {}", stats);
    println!();
    Ok(())
}

fn example_each_granularity() -> textdiff_core::Result<()> {
    println!("Example 2: Granularities on the sample text");
    println!("{}", LINE);

    for granularity in Granularity::all() {
        let config = DiffConfig::new().with_granularity(granularity);
        let (_, stats) = compute_diff(ORIGINAL, MODIFIED, Some(config))?;
        println!("{:>10}: {}", granularity, stats);
    }
    println!();
    Ok(())
}

fn example_ignore_options() -> textdiff_core::Result<()> {
    println!("Example 3: Ignoring case and whitespace");
    println!("{}", LINE);

    let original = "HELLO   World";
    let modified = "hello world";

    let (raw, _) = compute_diff(original, modified, None)?;
    println!("Without normalization identical: {}", raw.is_identical());

    let config = DiffConfig::new()
        .with_ignore_case(true)
        .with_ignore_whitespace(true);
    let (normalized, _) = compute_diff(original, modified, Some(config))?;
    println!("With normalization identical:    {}", normalized.is_identical());
    println!();
    Ok(())
}

fn example_report() -> textdiff_core::Result<()> {
    println!("Example 4: Export report (line mode)");
    println!("{}", LINE);

    let engine = DiffEngine::new(DiffConfig::new().with_granularity(Granularity::Line));
    let report = engine.report(ORIGINAL, MODIFIED)?;
    println!("{}", report);
    Ok(())
}

fn example_length_guard() {
    println!("Example 5: Input length guard");
    println!("{}", LINE);

    let config = DiffConfig::new().with_max_input_len(Some(10));
    match compute_diff(ORIGINAL, MODIFIED, Some(config)) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {}", err),
    }
}
