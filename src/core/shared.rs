use crate::core::service::RestaurantService;
use crate::domain::model::{MenuItem, RestaurantSummary};
use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to a directory. One coarse lock guards the directory
/// and every menu in it.
#[derive(Clone)]
pub struct SharedDirectory {
    inner: Arc<Mutex<RestaurantService>>,
}

impl SharedDirectory {
    pub fn new(service: RestaurantService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RestaurantService>> {
        self.inner.lock().map_err(|_| DirectoryError::LockPoisoned)
    }

    pub fn add_restaurant(
        &self,
        name: &str,
        location: &str,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Result<RestaurantSummary> {
        let mut service = self.lock()?;
        Ok(service
            .add_restaurant(name, location, opening_time, closing_time)
            .summary())
    }

    pub fn remove_restaurant(&self, name: &str) -> Result<()> {
        self.lock()?.remove_restaurant(name).map(|_| ())
    }

    pub fn add_to_menu(&self, restaurant: &str, item: &str, price: Decimal) -> Result<MenuItem> {
        let mut service = self.lock()?;
        service
            .find_restaurant_by_name_mut(restaurant)?
            .add_to_menu(item, price)
            .cloned()
    }

    pub fn remove_from_menu(&self, restaurant: &str, item: &str) -> Result<MenuItem> {
        let mut service = self.lock()?;
        service
            .find_restaurant_by_name_mut(restaurant)?
            .remove_from_menu(item)
    }

    pub fn is_restaurant_open(&self, restaurant: &str) -> Result<bool> {
        let service = self.lock()?;
        Ok(service.find_restaurant_by_name(restaurant)?.is_restaurant_open())
    }

    pub fn get_order_total<S: AsRef<str>>(&self, restaurant: &str, item_names: &[S]) -> Result<Decimal> {
        let service = self.lock()?;
        service
            .find_restaurant_by_name(restaurant)?
            .get_order_total(item_names)
    }

    pub fn summaries(&self) -> Result<Vec<RestaurantSummary>> {
        let service = self.lock()?;
        Ok(service
            .get_restaurants()
            .iter()
            .map(|restaurant| restaurant.summary())
            .collect())
    }
}
