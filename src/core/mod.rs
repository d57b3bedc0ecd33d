pub mod restaurant;
pub mod service;
pub mod shared;

pub use crate::domain::model::{MenuItem, RestaurantSummary};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
