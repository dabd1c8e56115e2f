//! Conversions between Rust time values and the OS encodings: millisecond
//! timeouts, `FILETIME` ticks and `SYSTEMTIME` calendar fields.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::co;
use crate::error::SysResult;
use crate::types::{FILETIME, SYSTEMTIME};

/// Timeout value meaning "wait forever".
pub const INFINITE: u32 = 0xFFFF_FFFF;

/// `FILETIME` ticks per second (100 ns resolution).
pub const TICKS_PER_SEC: u64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01.
const EPOCH_DIFF_SECS: u64 = 11_644_473_600;

/// Days between 1601-01-01 and 1970-01-01.
const EPOCH_DIFF_DAYS: i64 = 134_774;

/// Timeout in milliseconds; `None` waits forever.
///
/// Finite durations saturate one below [`INFINITE`] so they never turn into
/// an unbounded wait.
pub fn duration_to_millis(timeout: Option<Duration>) -> u32 {
    match timeout {
        None => INFINITE,
        Some(d) => u32::try_from(d.as_millis()).map_or(INFINITE - 1, |ms| ms.min(INFINITE - 1)),
    }
}

pub fn millis_to_duration(ms: u32) -> Option<Duration> {
    if ms == INFINITE {
        None
    } else {
        Some(Duration::from_millis(ms as u64))
    }
}

#[must_use]
pub const fn filetime_to_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64
}

#[must_use]
pub const fn u64_to_filetime(ticks: u64) -> FILETIME {
    FILETIME {
        dwLowDateTime: (ticks & 0xFFFF_FFFF) as u32,
        dwHighDateTime: (ticks >> 32) as u32,
    }
}

pub fn filetime_to_system_time(ft: &FILETIME) -> SystemTime {
    let ticks = filetime_to_u64(ft);
    let since_1601 = Duration::new(ticks / TICKS_PER_SEC, ((ticks % TICKS_PER_SEC) * 100) as u32);
    let epoch_diff = Duration::from_secs(EPOCH_DIFF_SECS);
    if since_1601 >= epoch_diff {
        UNIX_EPOCH + (since_1601 - epoch_diff)
    } else {
        UNIX_EPOCH - (epoch_diff - since_1601)
    }
}

/// Times before 1601 saturate to a zero `FILETIME`.
pub fn system_time_to_filetime(t: SystemTime) -> FILETIME {
    let ticks = match t.duration_since(UNIX_EPOCH) {
        Ok(after) => duration_to_ticks(after).saturating_add(EPOCH_DIFF_SECS * TICKS_PER_SEC),
        Err(e) => (EPOCH_DIFF_SECS * TICKS_PER_SEC).saturating_sub(duration_to_ticks(e.duration())),
    };
    u64_to_filetime(ticks)
}

/// Number of 100 ns ticks in `d`, saturating.
pub fn duration_to_ticks(d: Duration) -> u64 {
    d.as_secs()
        .saturating_mul(TICKS_PER_SEC)
        .saturating_add((d.subsec_nanos() / 100) as u64)
}

/// Relative due time for `SetWaitableTimer`: negative ticks.
pub fn relative_due_time(d: Duration) -> i64 {
    let ticks = i64::try_from(duration_to_ticks(d)).unwrap_or(i64::MAX);
    -ticks
}

/// Calendar fields of a `FILETIME`, as `FileTimeToSystemTime` computes them
/// (UTC, proleptic Gregorian, Sunday = 0).
pub fn filetime_to_systemtime(ft: &FILETIME) -> SysResult<SYSTEMTIME> {
    let ticks = filetime_to_u64(ft);
    if ticks > i64::MAX as u64 {
        return Err(co::ERROR::INVALID_PARAMETER);
    }

    let total_secs = ticks / TICKS_PER_SEC;
    let days = (total_secs / 86_400) as i64;
    let secs_of_day = total_secs % 86_400;
    let (year, month, day) = civil_from_days(days - EPOCH_DIFF_DAYS);
    if !(1601..=30827).contains(&year) {
        return Err(co::ERROR::INVALID_PARAMETER);
    }

    Ok(SYSTEMTIME {
        wYear: year as u16,
        wMonth: month as u16,
        // 1601-01-01 was a Monday.
        wDayOfWeek: ((days + 1) % 7) as u16,
        wDay: day as u16,
        wHour: (secs_of_day / 3600) as u16,
        wMinute: (secs_of_day % 3600 / 60) as u16,
        wSecond: (secs_of_day % 60) as u16,
        wMilliseconds: ((ticks % TICKS_PER_SEC) / 10_000) as u16,
    })
}

/// Inverse of [`filetime_to_systemtime`]. `wDayOfWeek` is ignored.
pub fn systemtime_to_filetime(st: &SYSTEMTIME) -> SysResult<FILETIME> {
    let valid = (1601..=30827).contains(&st.wYear)
        && (1..=12).contains(&st.wMonth)
        && st.wDay >= 1
        && st.wDay <= days_in_month(st.wYear as i64, st.wMonth as u32)
        && st.wHour < 24
        && st.wMinute < 60
        && st.wSecond < 60
        && st.wMilliseconds < 1000;
    if !valid {
        return Err(co::ERROR::INVALID_PARAMETER);
    }

    let days = days_from_civil(st.wYear as i64, st.wMonth as u32, st.wDay as u32) + EPOCH_DIFF_DAYS;
    let secs = days as u64 * 86_400
        + st.wHour as u64 * 3600
        + st.wMinute as u64 * 60
        + st.wSecond as u64;
    Ok(u64_to_filetime(secs * TICKS_PER_SEC + st.wMilliseconds as u64 * 10_000))
}

fn is_leap(y: i64) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}

fn days_in_month(y: i64, m: u32) -> u16 {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(y) => 29,
        2 => 28,
        _ => 0,
    }
}

// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(y: i64, m: u32, d: u32) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}
