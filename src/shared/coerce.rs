//! Lenient conversions for numeric feed cells.
//!
//! Feed rows arrive as strings. A cell that does not hold a number
//! becomes 0 instead of failing the load.

pub fn to_f64(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn to_u32(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

pub fn to_i64(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Empty cells are treated the same as missing ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
