pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::run_command;
#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FixedClock, SystemClock};
pub use config::DirectoryConfig;
pub use core::{restaurant::Restaurant, service::RestaurantService, shared::SharedDirectory};
pub use domain::model::{MenuItem, RestaurantSummary};
pub use domain::ports::Clock;
pub use utils::error::{DirectoryError, Result};
