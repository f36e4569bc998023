use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    /// Local calendar date.
    fn today(&self) -> NaiveDate;
}
