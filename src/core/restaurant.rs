use crate::adapters::SystemClock;
use crate::domain::model::{MenuItem, RestaurantSummary};
use crate::domain::ports::Clock;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::validate_price;
use chrono::NaiveTime;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<MenuItem>,
    clock: Arc<dyn Clock>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self::with_clock(name, location, opening_time, closing_time, Arc::new(SystemClock))
    }

    /// Hours are assumed not to span midnight (`opening_time <= closing_time`).
    pub fn with_clock(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn current_time(&self) -> NaiveTime {
        self.clock.now()
    }

    /// Open strictly between opening and closing; both instants count as closed.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        time > self.opening_time && time < self.closing_time
    }

    pub fn is_restaurant_open(&self) -> bool {
        self.is_open_at(self.current_time())
    }

    /// First menu entry with exactly this name.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Appends an item. A repeated name is kept but shadowed by the earlier entry.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: Decimal) -> Result<&MenuItem> {
        let name = name.into();
        validate_price(&name, price)?;

        if self.find_item(&name).is_some() {
            tracing::warn!(
                "Duplicate menu item '{}' added to {}; lookups resolve to the first entry",
                name,
                self.name
            );
        }

        tracing::debug!("Adding '{}' ({}) to {}", name, price, self.name);
        self.menu.push(MenuItem::new(name, price));
        let index = self.menu.len() - 1;
        Ok(&self.menu[index])
    }

    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem> {
        let position = self
            .menu
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| DirectoryError::ItemNotFound {
                restaurant: self.name.clone(),
                item: name.to_string(),
            })?;

        tracing::debug!("Removing '{}' from {}", name, self.name);
        Ok(self.menu.remove(position))
    }

    /// Prices `item_names` as of `time`. The closed check runs before any lookup.
    pub fn order_total_at<S: AsRef<str>>(&self, time: NaiveTime, item_names: &[S]) -> Result<Decimal> {
        if !self.is_open_at(time) {
            tracing::warn!("Rejected order at {}: {} is closed", time, self.name);
            return Err(DirectoryError::RestaurantClosed {
                restaurant: self.name.clone(),
                at: time,
            });
        }

        let mut total = Decimal::ZERO;
        for item_name in item_names {
            let item_name = item_name.as_ref();
            let item = self
                .find_item(item_name)
                .ok_or_else(|| DirectoryError::ItemNotFound {
                    restaurant: self.name.clone(),
                    item: item_name.to_string(),
                })?;
            total += item.price;
        }

        tracing::debug!(
            "Order total at {} for {} items: {}",
            self.name,
            item_names.len(),
            total
        );
        Ok(total)
    }

    pub fn get_order_total<S: AsRef<str>>(&self, item_names: &[S]) -> Result<Decimal> {
        self.order_total_at(self.current_time(), item_names)
    }

    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            name: self.name.clone(),
            location: self.location.clone(),
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            is_open: self.is_restaurant_open(),
            menu: self.menu.clone(),
        }
    }
}

impl fmt::Debug for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restaurant")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("opening_time", &self.opening_time)
            .field("closing_time", &self.closing_time)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(
            f,
            "Opening time: {}",
            self.opening_time.format("%H:%M:%S")
        )?;
        writeln!(
            f,
            "Closing time: {}",
            self.closing_time.format("%H:%M:%S")
        )?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n  {}: {}", item.name, item.price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockClock;
    use rust_decimal_macros::dec;

    fn time(value: &str) -> NaiveTime {
        NaiveTime::parse_from_str(value, "%H:%M:%S").unwrap()
    }

    fn restaurant_at(now: &'static str) -> Restaurant {
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || time(now));

        let mut restaurant = Restaurant::with_clock(
            "Amelie's cafe",
            "Chennai",
            time("10:30:00"),
            time("22:00:00"),
            Arc::new(clock),
        );
        restaurant.add_to_menu("Sweet corn soup", dec!(119)).unwrap();
        restaurant.add_to_menu("Vegetable lasagne", dec!(269)).unwrap();
        restaurant
    }

    #[test]
    fn test_open_between_opening_and_closing() {
        assert!(restaurant_at("11:00:00").is_restaurant_open());
    }

    #[test]
    fn test_closed_outside_hours() {
        assert!(!restaurant_at("23:00:00").is_restaurant_open());
        assert!(!restaurant_at("09:00:00").is_restaurant_open());
    }

    #[test]
    fn test_boundaries_are_closed() {
        assert!(!restaurant_at("10:30:00").is_restaurant_open());
        assert!(!restaurant_at("22:00:00").is_restaurant_open());
        assert!(restaurant_at("10:30:01").is_restaurant_open());
        assert!(restaurant_at("21:59:59").is_restaurant_open());
    }

    #[test]
    fn test_add_and_remove_menu_items() {
        let mut restaurant = restaurant_at("11:00:00");
        let initial = restaurant.menu().len();

        restaurant.add_to_menu("Sizzling brownie", dec!(319)).unwrap();
        assert_eq!(restaurant.menu().len(), initial + 1);

        let removed = restaurant.remove_from_menu("Vegetable lasagne").unwrap();
        assert_eq!(removed.price, dec!(269));
        assert_eq!(restaurant.menu().len(), initial);
    }

    #[test]
    fn test_remove_missing_item_leaves_menu_unchanged() {
        let mut restaurant = restaurant_at("11:00:00");
        let result = restaurant.remove_from_menu("French fries");

        assert!(matches!(result, Err(DirectoryError::ItemNotFound { .. })));
        assert_eq!(restaurant.menu().len(), 2);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut restaurant = restaurant_at("11:00:00");
        let result = restaurant.add_to_menu("Refund", dec!(-5));

        assert!(matches!(result, Err(DirectoryError::InvalidPrice { .. })));
        assert_eq!(restaurant.menu().len(), 2);
    }

    #[test]
    fn test_duplicate_item_resolves_to_first() {
        let mut restaurant = restaurant_at("11:00:00");
        restaurant.add_to_menu("Sweet corn soup", dec!(99)).unwrap();

        assert_eq!(restaurant.menu().len(), 3);
        assert_eq!(restaurant.find_item("Sweet corn soup").unwrap().price, dec!(119));
        assert_eq!(
            restaurant.get_order_total(&["Sweet corn soup"]).unwrap(),
            dec!(119)
        );

        restaurant.remove_from_menu("Sweet corn soup").unwrap();
        assert_eq!(restaurant.find_item("Sweet corn soup").unwrap().price, dec!(99));
    }

    #[test]
    fn test_order_total() {
        let restaurant = restaurant_at("11:00:00");
        let total = restaurant
            .get_order_total(&["Sweet corn soup", "Vegetable lasagne"])
            .unwrap();
        assert_eq!(total, dec!(388));
    }

    #[test]
    fn test_order_total_counts_repeated_items() {
        let restaurant = restaurant_at("11:00:00");
        let total = restaurant
            .get_order_total(&["Sweet corn soup", "Sweet corn soup"])
            .unwrap();
        assert_eq!(total, dec!(238));
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let restaurant = restaurant_at("11:00:00");
        let items: Vec<String> = Vec::new();
        assert_eq!(restaurant.get_order_total(&items).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_order_total_when_closed() {
        let restaurant = restaurant_at("23:00:00");
        let result = restaurant.get_order_total(&["Sweet corn soup", "Vegetable lasagne"]);
        assert!(matches!(result, Err(DirectoryError::RestaurantClosed { .. })));
    }

    #[test]
    fn test_closed_takes_precedence_over_missing_item() {
        let restaurant = restaurant_at("23:00:00");
        let result = restaurant.get_order_total(&["French fries"]);
        assert!(matches!(result, Err(DirectoryError::RestaurantClosed { .. })));
    }

    #[test]
    fn test_order_total_with_missing_item() {
        let restaurant = restaurant_at("11:00:00");
        let result = restaurant.get_order_total(&["Sweet corn soup", "French fries"]);
        match result {
            Err(DirectoryError::ItemNotFound { restaurant, item }) => {
                assert_eq!(restaurant, "Amelie's cafe");
                assert_eq!(item, "French fries");
            }
            other => panic!("Expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_display_lists_menu() {
        let restaurant = restaurant_at("11:00:00");
        let rendered = restaurant.to_string();
        assert!(rendered.contains("Restaurant: Amelie's cafe"));
        assert!(rendered.contains("Opening time: 10:30:00"));
        assert!(rendered.contains("Sweet corn soup: 119"));
    }

    #[test]
    fn test_summary_reflects_clock() {
        let summary = restaurant_at("23:00:00").summary();
        assert!(!summary.is_open);
        assert_eq!(summary.menu.len(), 2);
    }
}
