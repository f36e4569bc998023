use chrono::{Local, NaiveDate};
use sc_core::ports::ClockPort;

/// Clock backed by the local wall time.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
