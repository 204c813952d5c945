use chrono::NaiveDate;

/// Parse `YYYY/MM/DD HH:MM:SS[.fraction]` (UTC) into epoch milliseconds.
///
/// The fraction is truncated to millisecond precision. Any component that fails to parse, or a
/// combination that is not a real calendar date-time, yields `None`.
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    let mut parts = raw.split_whitespace();
    let date = parts.next()?;
    let time = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let mut ymd = date.split('/');
    let year: i32 = ymd.next()?.parse().ok()?;
    let month: u32 = ymd.next()?.parse().ok()?;
    let day: u32 = ymd.next()?.parse().ok()?;
    if ymd.next().is_some() {
        return None;
    }

    let (clock, fraction) = match time.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (time, None),
    };

    let mut hms = clock.split(':');
    let hour: u32 = hms.next()?.parse().ok()?;
    let minute: u32 = hms.next()?.parse().ok()?;
    let second: u32 = hms.next()?.parse().ok()?;
    if hms.next().is_some() {
        return None;
    }

    let millis = match fraction {
        Some(fraction) => fraction_to_millis(fraction)?,
        None => 0,
    };

    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, millis)
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn fraction_to_millis(fraction: &str) -> Option<u32> {
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // "5" is 500ms, "123456" is 123ms.
    let mut millis = 0;
    for i in 0..3 {
        let digit = fraction.as_bytes().get(i).map_or(0, |b| u32::from(b - b'0'));
        millis = millis * 10 + digit;
    }
    Some(millis)
}
