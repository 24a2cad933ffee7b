//! Interval formatting helpers.

use dpos_types::time::NANOS_PER_MILLI;

/// Format a nanosecond interval for humans, e.g. `"3s"`, `"54s"`, `"1m 30s"`,
/// `"250ms"`. Sub-millisecond remainders are dropped.
pub fn format_interval(nanos: u64) -> String {
    let millis = nanos / NANOS_PER_MILLI;
    let secs = millis / 1000;
    if millis % 1000 != 0 && secs < 60 {
        if secs == 0 {
            format!("{}ms", millis)
        } else {
            format!("{}.{:03}s", secs, millis % 1000)
        }
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_scale() {
        assert_eq!(format_interval(250 * NANOS_PER_MILLI), "250ms");
        assert_eq!(format_interval(1_500 * NANOS_PER_MILLI), "1.500s");
        assert_eq!(format_interval(3_000 * NANOS_PER_MILLI), "3s");
        assert_eq!(format_interval(54_000 * NANOS_PER_MILLI), "54s");
        assert_eq!(format_interval(90_000 * NANOS_PER_MILLI), "1m 30s");
        assert_eq!(format_interval(7_260_000 * NANOS_PER_MILLI), "2h 1m");
        assert_eq!(format_interval(90_000_000 * NANOS_PER_MILLI), "1d 1h");
        assert_eq!(format_interval(0), "0s");
    }
}
