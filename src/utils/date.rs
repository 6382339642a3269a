use chrono::NaiveDate;

/// Storage and input format for every date in the table.
pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
/// Blank or malformed input yields `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Resolve an optional reference date given on the command line.
/// `None` means today; anything else must be a valid `YYYY-MM-DD`.
pub fn resolve_as_of(s: Option<&str>) -> Result<NaiveDate, String> {
    match s {
        None => Ok(today()),
        Some(raw) => parse_date(raw).ok_or_else(|| raw.to_string()),
    }
}
