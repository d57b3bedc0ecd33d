use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Restaurant not found: {name}")]
    RestaurantNotFound { name: String },

    #[error("Item '{item}' not found on the menu of {restaurant}")]
    ItemNotFound { restaurant: String, item: String },

    #[error("{restaurant} is closed at {at}")]
    RestaurantClosed { restaurant: String, at: NaiveTime },

    #[error("Invalid price for '{item}': {price}")]
    InvalidPrice { item: String, price: Decimal },

    #[error("Invalid time of day '{value}': {reason}")]
    InvalidTimeOfDay { value: String, reason: String },

    #[error("Invalid hours for {restaurant}: opens {opening} after closing {closing}")]
    InvalidHours {
        restaurant: String,
        opening: NaiveTime,
        closing: NaiveTime,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Directory lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Availability,
    Validation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RestaurantNotFound { .. } | Self::ItemNotFound { .. } => ErrorCategory::Lookup,
            Self::RestaurantClosed { .. } => ErrorCategory::Availability,
            Self::InvalidPrice { .. } | Self::InvalidTimeOfDay { .. } | Self::InvalidHours { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::LockPoisoned | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Availability => ErrorSeverity::Medium,
            ErrorCategory::Lookup | ErrorCategory::Validation | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::RestaurantNotFound { .. } => {
                "Run `list` to see registered restaurants; names are case-sensitive".to_string()
            }
            Self::ItemNotFound { restaurant, .. } => {
                format!("Run `menu \"{}\"` to see available items", restaurant)
            }
            Self::RestaurantClosed { .. } => {
                "Place the order between the restaurant's opening and closing time".to_string()
            }
            Self::InvalidPrice { .. } => "Menu prices must be zero or positive".to_string(),
            Self::InvalidTimeOfDay { .. } => "Use the HH:MM:SS format, e.g. 10:30:00".to_string(),
            Self::InvalidHours { .. } => {
                "Opening time must not be later than closing time; overnight hours are not supported"
                    .to_string()
            }
            Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field }
            | Self::ConfigValidationError { field, .. } => {
                format!("Check the '{}' entry in the directory file", field)
            }
            Self::LockPoisoned => "Restart the process; a previous operation panicked".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::RestaurantNotFound { name } => format!("No restaurant named \"{}\"", name),
            Self::ItemNotFound { restaurant, item } => {
                format!("\"{}\" does not serve \"{}\"", restaurant, item)
            }
            Self::RestaurantClosed { restaurant, at } => {
                format!("\"{}\" is closed at {}", restaurant, at.format("%H:%M:%S"))
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
