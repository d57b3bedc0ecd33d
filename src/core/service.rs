use crate::adapters::SystemClock;
use crate::core::restaurant::Restaurant;
use crate::domain::ports::Clock;
use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveTime;
use std::sync::Arc;

/// In-memory directory of restaurants, kept in registration order.
///
/// Names are not required to be unique. Lookups and removals act on the first
/// restaurant registered under a name.
pub struct RestaurantService {
    restaurants: Vec<Restaurant>,
    clock: Arc<dyn Clock>,
}

impl RestaurantService {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Every restaurant created by this service reads time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            restaurants: Vec::new(),
            clock,
        }
    }

    pub fn add_restaurant(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> &mut Restaurant {
        let restaurant = Restaurant::with_clock(
            name,
            location,
            opening_time,
            closing_time,
            Arc::clone(&self.clock),
        );

        if self.position(restaurant.name()).is_some() {
            tracing::warn!(
                "A restaurant named '{}' is already registered; lookups resolve to the first one",
                restaurant.name()
            );
        }

        tracing::info!(
            "Registered {} ({}), open {}-{}",
            restaurant.name(),
            restaurant.location(),
            opening_time,
            closing_time
        );
        self.restaurants.push(restaurant);
        let index = self.restaurants.len() - 1;
        &mut self.restaurants[index]
    }

    pub fn remove_restaurant(&mut self, name: &str) -> Result<Restaurant> {
        let index = self.position(name).ok_or_else(|| not_found(name))?;
        tracing::info!("Removed {}", name);
        Ok(self.restaurants.remove(index))
    }

    pub fn find_restaurant_by_name(&self, name: &str) -> Result<&Restaurant> {
        tracing::debug!("Looking up restaurant '{}'", name);
        self.restaurants
            .iter()
            .find(|restaurant| restaurant.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> Result<&mut Restaurant> {
        self.restaurants
            .iter_mut()
            .find(|restaurant| restaurant.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn get_restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.restaurants
            .iter()
            .position(|restaurant| restaurant.name() == name)
    }
}

impl Default for RestaurantService {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(name: &str) -> DirectoryError {
    DirectoryError::RestaurantNotFound {
        name: name.to_string(),
    }
}
