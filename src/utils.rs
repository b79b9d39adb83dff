use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::types::LessonPeriod;

/// Lesson weeks run Saturday to Friday.
pub const WEEK_START: Weekday = Weekday::Sat;

const TITLE_QUOTES: [char; 4] = ['\'', '"', '“', '”'];

/// Returns the latest `weekday` on or before `date` (`date` itself if it matches).
pub fn week_start_on_or_before(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let days_to_subtract = (current + 7 - target) % 7;
    date - Duration::days(days_to_subtract as i64)
}

/// Quarter (1-4) of a calendar month (1-12).
pub fn quarter_of_month(month: u32) -> u32 {
    (month + 2) / 3
}

/// Maps a date to `(quarter, week_of_quarter)`.
///
/// Week 1 starts on the last [`WEEK_START`] on or before the first day of the
/// quarter, so the first week of a quarter may begin in the previous month.
pub fn compute_period(date: NaiveDate) -> (u32, u32) {
    let quarter = quarter_of_month(date.month());
    let quarter_start_month = (quarter - 1) * 3 + 1;
    // day 1 of a month between 1 and 12 always exists
    let quarter_start = date
        .with_day(1)
        .and_then(|d| d.with_month(quarter_start_month))
        .unwrap_or(date);
    let week_start = week_start_on_or_before(quarter_start, WEEK_START);
    let days = (date - week_start).num_days();

    (quarter, (days / 7) as u32 + 1)
}

/// [`compute_period`] plus the calendar year of `date`.
///
/// # Example
///
/// ```
/// let period = lesson_period(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
/// assert_eq!(period.to_string(), "2025 Q1 Lesson 6");
/// ```
pub fn lesson_period(date: NaiveDate) -> LessonPeriod {
    let (quarter, week) = compute_period(date);
    LessonPeriod {
        year: date.year(),
        quarter,
        week,
    }
}

/// The seven dates of the lesson week containing `date`, starting on [`WEEK_START`].
pub fn build_week(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start_on_or_before(date, WEEK_START);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Cuts a raw video title down to the lesson title.
///
/// `"Lesson 5 | Sabbath School Panel by 3ABN"` becomes `"Lesson 5"`. Titles
/// without a pipe are only trimmed of whitespace.
pub fn extract_lesson_title(raw: &str) -> String {
    match raw.split_once('|') {
        Some((left, _)) => left
            .trim()
            .trim_matches(|c| TITLE_QUOTES.contains(&c))
            .trim()
            .to_string(),
        None => raw.trim().to_string(),
    }
}

/// Resolves the `--date` flag: today when absent, otherwise a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns the `chrono` parse error for anything that is not a valid
/// calendar date, such as `2025-13-01`.
///
/// # Example
///
/// ```
/// let date = get_date_from_string(Some("2025-02-03".to_string()))?;
/// assert_eq!(lesson_period(date).week, 6);
/// ```
pub fn get_date_from_string(date: Option<String>) -> Result<NaiveDate, chrono::ParseError> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d"),
        None => Ok(Local::now().date_naive()),
    }
}
