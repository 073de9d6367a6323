//! Relative date labels for the expense list.

use chrono::{Local, NaiveDate};

/// Today's calendar date, used as the default form value and as the
/// reference point for relative labels.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Labels a date relative to `today`: "today", "yesterday", "N days ago"
/// up to six days back, and an absolute date beyond that. Future dates
/// also format absolutely.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (today - date).num_days();
    match diff {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{diff} days ago"),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
