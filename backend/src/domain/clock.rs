use chrono::{Local, NaiveDate, Utc};
use std::cell::Cell;

/// Source of "now" for id assignment and candidate dates
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;

    /// Today's date in the visitor's local time zone
    fn today(&self) -> NaiveDate;
}

/// Wall clock; in the browser chrono reads it through `js_sys::Date`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given instant, advanced by hand
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Cell<u64>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate, millis: u64) -> Self {
        Self {
            millis: Cell::new(millis),
            today,
        }
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.get()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
