use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Wire format for bare dates, interpreted as midnight.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format for date+time stamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a ledger timestamp: either `YYYY-MM-DD` (midnight) or
/// `YYYY-MM-DDTHH:MM`. These are the only accepted wire forms.
pub fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.len() == 10 {
        parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
    } else {
        NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok()
    }
}

pub fn format_stamp(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
