use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Day-first date with dotted time, as Indonesian-locale spreadsheets expect.
pub const DISPLAY_FORMAT: &str = "%-d/%-m/%Y, %H.%M.%S";

/// Parse a client timestamp. Accepts RFC 3339, a bare local date-time
/// (read in `offset`) and a bare date (read as UTC midnight).
pub fn parse(raw: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn format(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format(DISPLAY_FORMAT).to_string()
}

/// Render the submission timestamp for the sheet, falling back to `received_at`
/// when the client sent nothing usable.
pub fn display(raw: Option<&str>, offset: FixedOffset, received_at: DateTime<Utc>) -> String {
    let instant = match raw.and_then(|r| parse(r, offset)) {
        Some(instant) => instant,
        None => {
            tracing::debug!("Unusable timestamp {raw:?}, using receive time");
            received_at
        }
    };
    format(instant, offset)
}
