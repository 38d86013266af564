use chrono::{DateTime, FixedOffset, Utc};

const BEIJING_UTC_OFFSET_SECS: i32 = 8 * 3600;

pub fn beijing_timestamp(now: DateTime<Utc>) -> String {
    let beijing =
        FixedOffset::east_opt(BEIJING_UTC_OFFSET_SECS).expect("offset is within +-24h");
    now.with_timezone(&beijing)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_instant_at_utc_plus_eight() {
        let now = Utc.with_ymd_and_hms(2026, 2, 21, 16, 30, 5).unwrap();
        assert_eq!(beijing_timestamp(now), "2026/02/22 00:30:05");
    }

    #[test]
    fn pads_all_numeric_fields_to_two_digits() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(beijing_timestamp(now), "2026/01/02 11:04:05");
    }
}
