//! Date/Time Value Formatting
//!
//! Formats an instant plus offset into the value strings the HTML date and
//! time input types expect. Fields are extracted in the target offset and
//! zero-padded to two digits (four for the year); months are 1-based.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// `YYYY-MM-DD`, for `<input type="date">`
pub fn date_value(moment: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = moment.with_timezone(&offset);
    format!("{:04}-{:02}-{:02}", local.year(), local.month(), local.day())
}

/// `YYYY-MM-DDTHH:MM`, for `<input type="datetime-local">`
pub fn datetime_local_value(moment: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = moment.with_timezone(&offset);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute()
    )
}

/// `YYYY-MM`, for `<input type="month">`
pub fn month_value(moment: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = moment.with_timezone(&offset);
    format!("{:04}-{:02}", local.year(), local.month())
}

/// `HH:MM`, for `<input type="time">`
pub fn time_value(moment: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = moment.with_timezone(&offset);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// `YYYY-W<week>`, for `<input type="week">`
///
/// The week number is caller-supplied and rendered verbatim; no ISO week
/// arithmetic is performed here.
pub fn week_value(moment: DateTime<Utc>, offset: FixedOffset, week: u32) -> String {
    let local = moment.with_timezone(&offset);
    format!("{:04}-W{week}", local.year())
}
