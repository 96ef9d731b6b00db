//! PDF date-string handling.
//!
//! PDF dates follow `D:YYYYMMDDHHmmSS±HH'mm'` where every component after
//! the year is optional. Parsing is total: a string that fails the PDF
//! layout falls back to generic date parsing, and a string that fails both
//! renders as "Unknown".

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};

/// Parse a PDF date string into a timezone-aware date-time.
///
/// Missing time components default to `00`; a missing offset is treated as
/// UTC. Returns `None` only when both the PDF layout and the generic
/// fallbacks fail to match.
pub fn parse_pdf_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    let s = trimmed
        .strip_prefix("D:")
        .or_else(|| trimmed.strip_prefix("d:"))
        .unwrap_or(trimmed);
    let had_prefix = s.len() != trimmed.len();

    // A bare "2024-12-25" starts with four digits too; only treat the
    // string as PDF-layout when the D: prefix says so or the digit run
    // extends past the year.
    let digit_run = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_run < 4 || !(had_prefix || digit_run >= 6 || digit_run == s.len()) {
        return parse_generic(trimmed);
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month = two_digits(s, 4).unwrap_or(1).clamp(1, 12);
    let day = two_digits(s, 6).unwrap_or(1).clamp(1, 31);
    let hour = two_digits(s, 8).unwrap_or(0).clamp(0, 23);
    let minute = two_digits(s, 10).unwrap_or(0).clamp(0, 59);
    let second = two_digits(s, 12).unwrap_or(0).clamp(0, 59);

    // Clamp the day when it overflows the month (e.g. D:20240230...).
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, day.min(28)))?;
    let naive = date.and_hms_opt(hour, minute, second)?;
    let offset = parse_offset(&s[4..]);
    naive.and_local_timezone(offset).single()
}

/// Render a PDF date string for display, falling back to "Unknown".
pub fn format_pdf_date(raw: &str) -> String {
    match parse_pdf_date(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Render an elapsed gap in its largest applicable unit.
///
/// Days when at least one whole day elapsed, otherwise hours, otherwise
/// minutes; singular and plural forms are distinguished.
pub fn describe_gap(gap: Duration) -> String {
    let days = gap.num_days();
    if days >= 1 {
        return pluralize(days, "day");
    }
    let hours = gap.num_hours();
    if hours >= 1 {
        return pluralize(hours, "hour");
    }
    pluralize(gap.num_minutes(), "minute")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

fn two_digits(s: &str, at: usize) -> Option<u32> {
    let slice = s.get(at..at + 2)?;
    if slice.bytes().all(|b| b.is_ascii_digit()) {
        slice.parse().ok()
    } else {
        None
    }
}

fn parse_offset(after_year: &str) -> FixedOffset {
    let utc = FixedOffset::east_opt(0).expect("zero offset");
    let Some(pos) = after_year.find(['Z', 'z', '+', '-']) else {
        return utc;
    };
    let tz = &after_year[pos..];
    let mut chars = tz.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return utc,
    };
    let rest: String = chars.filter(|c| c.is_ascii_digit()).collect();
    let hours: i32 = rest.get(0..2).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: i32 = rest.get(2..4).and_then(|m| m.parse().ok()).unwrap_or(0);
    let seconds = sign * (hours * 3600 + minutes * 60);
    FixedOffset::east_opt(seconds).unwrap_or(utc)
}

fn parse_generic(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }
    let utc = FixedOffset::east_opt(0).expect("zero offset");
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return naive.and_local_timezone(utc).single();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0)?.and_local_timezone(utc).single();
    }
    None
}
