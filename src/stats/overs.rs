//! Conversions between the `"whole.balls"` overs notation and legal ball counts.

/// Lenient integer prefix parse: leading whitespace, then digits.
/// Anything without a leading digit reads as 0.
fn leading_count(part: &str) -> u32 {
    let digits: String = part
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Convert an overs string such as `"3.4"` into legal balls (22).
///
/// Never fails: a missing or malformed component counts as 0.
pub fn parse_overs_to_balls(overs: Option<&str>) -> u32 {
    let Some(overs) = overs.filter(|o| !o.is_empty()) else {
        return 0;
    };
    let mut parts = overs.split('.');
    let whole = parts.next().map(leading_count).unwrap_or(0);
    let partial = parts.next().map(leading_count).unwrap_or(0);
    whole.saturating_mul(6).saturating_add(partial)
}

/// Render a ball count as overs, e.g. 22 -> `"3.4"`.
pub fn balls_to_overs(balls: u32) -> String {
    format!("{}.{}", balls / 6, balls % 6)
}
