//! Display-string formatting for the clock and the status panel.
//!
//! Out-of-range inputs never fail: hours above 23 and minutes above 59 are
//! shown as 0, negative counts as 0.

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Front appends a zero to a number below ten.
pub fn zero_pad(n: u32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Formats a raw 0–23 hour. Padding applies to both 12 and 24 hour modes.
pub fn format_hour(raw: u32, use_12_hour: bool, zero_pad_hour: bool) -> String {
    let raw = if raw > 23 { 0 } else { raw };
    let hour = if use_12_hour {
        match raw % 12 {
            0 => 12,
            h => h,
        }
    } else {
        raw
    };

    if zero_pad_hour {
        zero_pad(hour)
    } else {
        hour.to_string()
    }
}

pub fn format_minute(raw: u32) -> String {
    let raw = if raw > 59 { 0 } else { raw };
    zero_pad(raw)
}

/// Groups only the thousands digit block: 1234 -> "1,234", 1000000 -> "1000,000".
pub fn format_count(n: i64) -> String {
    let n = n.max(0);
    if n > 999 {
        format!("{},{:03}", n / 1000, n % 1000)
    } else {
        n.to_string()
    }
}

pub fn format_battery_label(level: u8, percent_sign: &str) -> String {
    format!("{}{}", level.min(100), percent_sign)
}

/// Sun=0 .. Sat=6.
pub fn day_name(days_from_sunday: u32) -> &'static str {
    DAY_NAMES[(days_from_sunday % 7) as usize]
}

/// Jan=0 .. Dec=11.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[(month0 % 12) as usize]
}

pub fn format_month_day(month0: u32, day: u32) -> String {
    format!("{} {}", month_name(month0), day)
}

pub fn format_temperature(value: i32, symbol: char) -> String {
    format!("{}°{}", value, symbol)
}
