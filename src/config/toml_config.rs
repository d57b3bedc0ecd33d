use crate::core::service::RestaurantService;
use crate::domain::ports::Clock;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    parse_time_of_day, validate_hours, validate_non_empty_string, validate_price, Validate,
};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub directory: Option<DirectoryInfo>,
    #[serde(default)]
    pub restaurants: Vec<RestaurantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: String,
    pub closing_time: String,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub price: Decimal,
}

impl DirectoryConfig {
    /// Loads a directory file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a directory file after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(info) = &self.directory {
            validate_non_empty_string("directory.name", &info.name)?;
        }

        for restaurant in &self.restaurants {
            validate_non_empty_string("restaurants.name", &restaurant.name)?;
            validate_non_empty_string("restaurants.location", &restaurant.location)?;

            let opening = parse_time_of_day(&restaurant.opening_time)?;
            let closing = parse_time_of_day(&restaurant.closing_time)?;
            validate_hours(&restaurant.name, opening, closing)?;

            for item in &restaurant.menu {
                validate_non_empty_string("restaurants.menu.name", &item.name)?;
                validate_price(&item.name, item.price)?;
            }
        }

        Ok(())
    }

    pub fn directory_name(&self) -> &str {
        self.directory
            .as_ref()
            .map(|info| info.name.as_str())
            .unwrap_or("restaurant directory")
    }

    /// Builds a service holding every configured restaurant and its menu.
    pub fn build_service(&self, clock: Arc<dyn Clock>) -> Result<RestaurantService> {
        self.validate_config()?;

        let mut service = RestaurantService::with_clock(clock);
        for config in &self.restaurants {
            let restaurant = service.add_restaurant(
                config.name.as_str(),
                config.location.as_str(),
                parse_time_of_day(&config.opening_time)?,
                parse_time_of_day(&config.closing_time)?,
            );
            for item in &config.menu {
                restaurant.add_to_menu(item.name.as_str(), item.price)?;
            }
        }

        tracing::info!(
            "Loaded {} restaurants into {}",
            service.len(),
            self.directory_name()
        );
        Ok(service)
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
