use crate::utils::error::{DirectoryError, Result};
use chrono::NaiveTime;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]\d|2[0-3]):[0-5]\d:[0-5]\d$").expect("time-of-day pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a canonical `HH:MM:SS` time of day.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    if !TIME_OF_DAY.is_match(value) {
        return Err(DirectoryError::InvalidTimeOfDay {
            value: value.to_string(),
            reason: "expected HH:MM:SS".to_string(),
        });
    }

    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|e| DirectoryError::InvalidTimeOfDay {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(item: &str, price: Decimal) -> Result<()> {
    if price < Decimal::ZERO {
        return Err(DirectoryError::InvalidPrice {
            item: item.to_string(),
            price,
        });
    }
    Ok(())
}

/// Hours must not span midnight: opening may equal closing, never exceed it.
pub fn validate_hours(restaurant: &str, opening: NaiveTime, closing: NaiveTime) -> Result<()> {
    if opening > closing {
        return Err(DirectoryError::InvalidHours {
            restaurant: restaurant.to_string(),
            opening,
            closing,
        });
    }
    Ok(())
}
