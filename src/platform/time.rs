//! Time access
//!
//! Wall-clock milliseconds and the viewer's local calendar date, behind a
//! trait so rule evaluation can run against a frozen moment in tests.

/// A local calendar date. Month and day are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Clock capability for rule evaluation
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> f64;

    /// Today in the viewer's local timezone
    fn today(&self) -> LocalDate;
}

/// Real time from the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn today(&self) -> LocalDate {
        let date = js_sys::Date::new_0();
        LocalDate {
            year: date.get_full_year() as i32,
            // JS months are 0-based
            month: date.get_month() + 1,
            day: date.get_date(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }

    fn today(&self) -> LocalDate {
        use chrono::Datelike;
        let now = chrono::Local::now();
        LocalDate {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

/// Frozen clock for tests
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock {
    pub date: LocalDate,
    pub now_ms: f64,
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn today(&self) -> LocalDate {
        self.date
    }
}
