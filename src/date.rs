//! Calendar dates as UTC epoch milliseconds.

const MS_PER_DAY: i64 = 86_400_000;

/// Parses the ISO forms a date or month control produces (`YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD`), optionally followed by a time and an offset.
///
/// Times without an offset are read as UTC.
pub fn parse_date_to_epoch_ms(src: &str) -> Option<i64> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    let bytes = src.as_bytes();
    let mut i = 0usize;

    let mut sign = 1i64;
    let signed = i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-');
    if signed {
        if bytes[i] == b'-' {
            sign = -1;
        }
        i += 1;
    }

    let year_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let year_digits = i - year_start;
    if (signed && year_digits != 6) || (!signed && year_digits != 4) {
        return None;
    }
    let year = sign * src.get(year_start..i)?.parse::<i64>().ok()?;
    if signed && sign == -1 && year == 0 {
        return None;
    }

    let mut month = 1u32;
    let mut day = 1u32;
    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
        month = u32::try_from(parse_fixed_digits(src, &mut i, 2)?).ok()?;
        if i < bytes.len() && bytes[i] == b'-' {
            i += 1;
            day = u32::try_from(parse_fixed_digits(src, &mut i, 2)?).ok()?;
        }
    }

    if !(1..=12).contains(&month) {
        return None;
    }
    if day == 0 || day > days_in_month(year, month) {
        return None;
    }

    let mut hour = 0i64;
    let mut minute = 0i64;
    let mut second = 0i64;
    let mut millisecond = 0i64;
    let mut offset_minutes = 0i64;

    if i < bytes.len() {
        if bytes[i] != b'T' && bytes[i] != b't' && bytes[i] != b' ' {
            return None;
        }
        i += 1;

        hour = parse_fixed_digits(src, &mut i, 2)?;
        if i >= bytes.len() || bytes[i] != b':' {
            return None;
        }
        i += 1;
        minute = parse_fixed_digits(src, &mut i, 2)?;

        if i < bytes.len() && bytes[i] == b':' {
            i += 1;
            second = parse_fixed_digits(src, &mut i, 2)?;
        }

        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == frac_start {
                return None;
            }
            let mut parsed = 0i64;
            let mut digits = 0usize;
            for ch in src.get(frac_start..i)?.chars().take(3) {
                parsed = parsed * 10 + i64::from(ch.to_digit(10)?);
                digits += 1;
            }
            while digits < 3 {
                parsed *= 10;
                digits += 1;
            }
            millisecond = parsed;
        }

        if i < bytes.len() {
            match bytes[i] {
                b'Z' | b'z' => {
                    i += 1;
                }
                b'+' | b'-' => {
                    let tz_sign = if bytes[i] == b'+' { 1 } else { -1 };
                    i += 1;
                    let tz_hour = parse_fixed_digits(src, &mut i, 2)?;
                    if i < bytes.len() && bytes[i] == b':' {
                        i += 1;
                    }
                    let tz_minute = parse_fixed_digits(src, &mut i, 2)?;
                    if tz_hour > 23 || tz_minute > 59 {
                        return None;
                    }
                    offset_minutes = tz_sign * (tz_hour * 60 + tz_minute);
                }
                _ => return None,
            }
        }
    }

    if i != bytes.len() {
        return None;
    }
    // 24:00 is the end of the day; nothing past it.
    let end_of_day = hour == 24 && minute == 0 && second == 0 && millisecond == 0;
    if (hour > 23 && !end_of_day) || minute > 59 || second > 59 {
        return None;
    }

    let days = days_from_civil(year, month, day);
    let time_ms = ((hour * 60 + minute) * 60 + second) * 1_000 + millisecond;
    let out = (days as i128) * (MS_PER_DAY as i128) + (time_ms as i128)
        - (offset_minutes as i128) * 60_000;
    i64::try_from(out).ok()
}

/// `YYYY-MM-DD` of the UTC day containing `timestamp_ms`, the date portion of
/// its ISO-8601 form. Years outside `0..=9999` use the expanded `±YYYYYY` form.
pub fn format_date_input(timestamp_ms: i64) -> String {
    let (year, month, day) = civil_from_days(timestamp_ms.div_euclid(MS_PER_DAY));
    if (0..=9999).contains(&year) {
        format!("{year:04}-{month:02}-{day:02}")
    } else if year < 0 {
        format!("-{:06}-{month:02}-{day:02}", -(year as i128))
    } else {
        format!("+{year:06}-{month:02}-{day:02}")
    }
}

fn parse_fixed_digits(src: &str, i: &mut usize, width: usize) -> Option<i64> {
    let end = i.checked_add(width)?;
    let segment = src.get(*i..end)?;
    if !segment.as_bytes().iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    *i = end;
    segment.parse::<i64>().ok()
}

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let adjusted_year = year - if month <= 2 { 1 } else { 0 };
    let era = adjusted_year.div_euclid(400);
    let yoe = adjusted_year - era * 400;
    let month = i64::from(month);
    let day = i64::from(day);
    let doy = (153 * (month + if month > 2 { -3 } else { 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096).div_euclid(365);
    let mut year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2).div_euclid(153);
    let day = (doy - (153 * mp + 2).div_euclid(5) + 1) as u32;
    let month = (mp + if mp < 10 { 3 } else { -9 }) as u32;
    if month <= 2 {
        year += 1;
    }
    (year, month, day)
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
