use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Wire format for every date the service reads or emits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 86_400;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a sales record timestamp.
///
/// Plain `YYYY-MM-DD` dates land on midnight. Date-times keep their time of day so that
/// whole-day offsets are floored the same way regardless of how the caller exported them.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(d.and_time(NaiveTime::MIN));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|t| t.naive_utc())
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Whole days between `origin` and `t`, fractional days discarded (floor).
pub fn day_offset(origin: NaiveDateTime, t: NaiveDateTime) -> i64 {
    (t - origin).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Calendar date `offset` days after `origin`. `None` when it leaves chrono's range.
pub fn offset_to_date(origin: NaiveDateTime, offset: i64) -> Option<NaiveDate> {
    let days = u64::try_from(offset).ok()?;
    origin.checked_add_days(Days::new(days)).map(|t| t.date())
}
