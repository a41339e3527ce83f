//! Utilities for date formatting

use chrono::{Local, NaiveDate};

/// Format a date as YYYY-MM-DD, the shape date inputs and the service use
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in the browser's local time zone
pub fn today_iso() -> String {
    iso_date(Local::now().date_naive())
}
