use anyhow::Result;
use clap::Parser;
use restaurant_directory::{
    run_command, CliConfig, Clock, DirectoryConfig, DirectoryError, FixedClock, SystemClock,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

const DIRECTORY: &str = r#"
[directory]
name = "Chennai eats"

[[restaurants]]
name = "Amelie's cafe"
location = "Chennai"
opening_time = "10:30:00"
closing_time = "22:00:00"

[[restaurants.menu]]
name = "Sweet corn soup"
price = 119

[[restaurants.menu]]
name = "Vegetable lasagne"
price = 269
"#;

/// Parses `args` like the binary does and runs the command, returning stdout.
fn run(args: &[&str]) -> std::result::Result<String, DirectoryError> {
    let config = CliConfig::try_parse_from(
        std::iter::once("restaurant-directory").chain(args.iter().copied()),
    )
    .expect("arguments should parse");
    let directory = DirectoryConfig::from_toml_str(DIRECTORY)?;
    let clock: Arc<dyn Clock> = match config.at {
        Some(at) => Arc::new(FixedClock::new(at)),
        None => Arc::new(SystemClock),
    };

    let mut out = Vec::new();
    run_command(&config.command, &directory, clock, config.json, &mut out)?;
    Ok(String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn status_follows_at_pin() -> Result<()> {
    let open = run(&["--at", "11:00:00", "status", "Amelie's cafe"])?;
    assert_eq!(open.trim(), "Amelie's cafe is open (hours 10:30:00-22:00:00)");

    let closed = run(&["--at", "23:00:00", "status", "Amelie's cafe"])?;
    assert_eq!(closed.trim(), "Amelie's cafe is closed (hours 10:30:00-22:00:00)");

    let at_opening = run(&["--at", "10:30:00", "status", "Amelie's cafe"])?;
    assert!(at_opening.contains("is closed"));
    Ok(())
}

#[test]
fn total_prices_the_order() -> Result<()> {
    let output = run(&[
        "--at",
        "11:00:00",
        "total",
        "Amelie's cafe",
        "Sweet corn soup",
        "Vegetable lasagne",
    ])?;
    assert_eq!(output.trim(), "Order total at Amelie's cafe: 388");
    Ok(())
}

#[test]
fn total_as_json() -> Result<()> {
    let output = run(&[
        "--at",
        "11:00:00",
        "--json",
        "total",
        "Amelie's cafe",
        "Sweet corn soup",
    ])?;
    let value: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(value["restaurant"], "Amelie's cafe");
    let total: Decimal = serde_json::from_value(value["total"].clone())?;
    assert_eq!(total, dec!(119));
    Ok(())
}

#[test]
fn total_when_closed_fails() {
    let result = run(&["--at", "23:00:00", "total", "Amelie's cafe", "Sweet corn soup"]);

    let error = result.unwrap_err();
    assert!(matches!(error, DirectoryError::RestaurantClosed { .. }));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn unknown_restaurant_fails() {
    let result = run(&["--at", "11:00:00", "status", "Pantry d'or"]);

    let error = result.unwrap_err();
    assert!(matches!(error, DirectoryError::RestaurantNotFound { .. }));
    assert_eq!(error.exit_code(), 1);
}

#[test]
fn list_and_menu() -> Result<()> {
    let listing = run(&["--at", "11:00:00", "list"])?;
    assert_eq!(
        listing.trim(),
        "Amelie's cafe (Chennai) 10:30:00-22:00:00 [open]"
    );

    let menu = run(&["menu", "Amelie's cafe"])?;
    assert!(menu.contains("Sweet corn soup: 119"));
    assert!(menu.contains("Vegetable lasagne: 269"));
    Ok(())
}
