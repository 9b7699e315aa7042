use crate::error::{info_err, PortalError};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

#[cfg(target_arch = "wasm32")]
pub fn current_time_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_time_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Parses a lifetime like `7d`, `12h`, `30m`, `45s` or plain seconds.
pub fn parse_duration_secs(value: &str) -> Result<u64, PortalError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(info_err!("Empty duration"));
    }
    let (digits, unit) = match value.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&value[..idx], Some(c.to_ascii_lowercase())),
        _ => (value, None),
    };
    let amount = digits.trim().parse::<u64>().map_err(|_| info_err!("Invalid duration: {value}"))?;
    let factor = match unit {
        None | Some('s') => 1,
        Some('m') => SECS_PER_MINUTE,
        Some('h') => SECS_PER_HOUR,
        Some('d') => SECS_PER_DAY,
        Some(other) => return Err(info_err!("Invalid duration unit '{other}' in {value}")),
    };
    amount.checked_mul(factor).ok_or_else(|| info_err!("Duration too large: {value}"))
}

/// Record timestamp in the `YYYY-MM-DD HH:MM:SS` (UTC) form, which sorts lexically.
pub fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
