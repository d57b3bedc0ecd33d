use crate::config::{Command, DirectoryConfig};
use crate::core::service::RestaurantService;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::Arc;

/// Builds the directory from `directory` and runs `command` against it,
/// writing the result to `out`.
pub fn run_command<W: Write>(
    command: &Command,
    directory: &DirectoryConfig,
    clock: Arc<dyn Clock>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let service = directory.build_service(clock)?;

    match command {
        Command::List => list(&service, json, out),
        Command::Menu { restaurant } => {
            let restaurant = service.find_restaurant_by_name(restaurant)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&restaurant.summary())?)?;
            } else {
                writeln!(out, "{}", restaurant)?;
            }
            Ok(())
        }
        Command::Status { restaurant } => {
            let restaurant = service.find_restaurant_by_name(restaurant)?;
            let open = restaurant.is_restaurant_open();
            if json {
                writeln!(
                    out,
                    "{}",
                    serde_json::json!({ "restaurant": restaurant.name(), "open": open })
                )?;
            } else {
                writeln!(
                    out,
                    "{} is {} (hours {}-{})",
                    restaurant.name(),
                    if open { "open" } else { "closed" },
                    restaurant.opening_time(),
                    restaurant.closing_time()
                )?;
            }
            Ok(())
        }
        Command::Total { restaurant, items } => {
            let restaurant = service.find_restaurant_by_name(restaurant)?;
            let total = restaurant.get_order_total(items.as_slice())?;
            if json {
                writeln!(
                    out,
                    "{}",
                    serde_json::json!({
                        "restaurant": restaurant.name(),
                        "items": items,
                        "total": total,
                    })
                )?;
            } else {
                writeln!(out, "Order total at {}: {}", restaurant.name(), total)?;
            }
            Ok(())
        }
    }
}

fn list<W: Write>(service: &RestaurantService, json: bool, out: &mut W) -> Result<()> {
    if json {
        let summaries: Vec<_> = service
            .get_restaurants()
            .iter()
            .map(|restaurant| restaurant.summary())
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    if service.is_empty() {
        writeln!(out, "No restaurants registered")?;
    }
    for restaurant in service.get_restaurants() {
        writeln!(
            out,
            "{} ({}) {}-{} [{}]",
            restaurant.name(),
            restaurant.location(),
            restaurant.opening_time(),
            restaurant.closing_time(),
            if restaurant.is_restaurant_open() { "open" } else { "closed" }
        )?;
    }
    Ok(())
}
