/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Added-distance color: none → grey, short detour → green,
/// up to 50 km → yellow, beyond → red.
pub fn color_for_km(km: u32) -> &'static str {
    match km {
        0 => GREY,
        1..=20 => GREEN,
        21..=50 => YELLOW,
        _ => RED,
    }
}
