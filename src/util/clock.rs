//! Wall-clock readings for message timestamps.
//!
//! In the browser the locale time string comes from `Date`; native builds
//! (tests) fall back to a fixed `HH:MM:SS` UTC rendering.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// Display string for a timestamp taken from [`now_ms`].
pub fn format_time(timestamp_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        String::from(date.to_locale_time_string("default"))
    }
    #[cfg(not(feature = "csr"))]
    {
        utc_time_of_day(timestamp_ms)
    }
}

#[cfg(any(test, not(feature = "csr")))]
#[allow(clippy::cast_possible_truncation)]
fn utc_time_of_day(timestamp_ms: f64) -> String {
    let secs = (timestamp_ms / 1000.0).floor() as i64;
    let of_day = secs.rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", of_day / 3600, of_day % 3600 / 60, of_day % 60)
}
