use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Derives the topic seed for a date string.
///
/// Rolling `h * 31 + c` hash over UTF-16 code units. The shift truncates `h`
/// to 32 bits first, so seeds match the ones the browser client displays for
/// the same date. Not collision resistant.
pub fn seed(date: &str) -> u64 {
    let mut hash: i64 = 0;
    for unit in date.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = shifted.wrapping_sub(hash).wrapping_add(unit as i64);
    }
    hash.unsigned_abs()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The date `days` after `date`, saturating at the calendar bounds.
pub fn offset_date(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}
