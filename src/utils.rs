use axum::http::{header::InvalidHeaderValue, HeaderValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; HttpOnly; Max-Age=2592000; Path=/; SameSite=Strict{secure}"
    ))
}

/// Scores are multiples of 0.5; print them without trailing zeros.
pub fn format_points(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
