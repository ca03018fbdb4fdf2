use super::*;

#[test]
fn utc_time_of_day_formats_epoch() {
    assert_eq!(utc_time_of_day(0.0), "00:00:00");
}

#[test]
fn utc_time_of_day_wraps_at_midnight() {
    // 1 day + 13:05:09.750
    let ms = (86_400.0 + 13.0 * 3600.0 + 5.0 * 60.0 + 9.0) * 1000.0 + 750.0;
    assert_eq!(utc_time_of_day(ms), "13:05:09");
}

#[test]
fn utc_time_of_day_handles_pre_epoch_values() {
    assert_eq!(utc_time_of_day(-1000.0), "23:59:59");
}

#[cfg(not(feature = "csr"))]
#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
