use chrono::NaiveTime;

/// Source of the current local time of day.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}
