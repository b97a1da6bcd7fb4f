#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use stunden::libs::formatter::{average_per_day, format_date, format_duration, format_time};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "0:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "0:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "0:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "0:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::minutes(75)), "1:15");
        assert_eq!(format_duration(&Duration::minutes(495)), "8:15");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(5))), "2:05");
    }

    #[test]
    fn test_format_duration_hours_not_wrapped() {
        assert_eq!(format_duration(&Duration::minutes(1500)), "25:00");
        assert_eq!(format_duration(&Duration::minutes(10020)), "167:00");
        assert_eq!(format_duration(&Duration::hours(8760)), "8760:00");
    }

    #[test]
    fn test_format_duration_seconds_truncated() {
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(59))), "0:30");
        assert_eq!(format_duration(&Duration::seconds(3661)), "1:01");
    }

    #[test]
    fn test_format_duration_negative_keeps_sign() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "-0:30");
        assert_eq!(format_duration(&Duration::minutes(-90)), "-1:30");
    }

    #[test]
    fn test_format_time_zero_padded() {
        assert_eq!(format_time(&NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "09:05");
        assert_eq!(format_time(&NaiveTime::from_hms_opt(17, 45, 30).unwrap()), "17:45");
        assert_eq!(format_time(&NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "00:00");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date(&NaiveDate::from_ymd_opt(2013, 9, 9).unwrap()), "2013-09-09");
    }

    #[test]
    fn test_average_per_day_truncates() {
        // 10020 / 21 = 477.14...
        let average = average_per_day(&Duration::minutes(10020), 21);
        assert_eq!(average, Duration::minutes(477));
        assert_eq!(format_duration(&average), "7:57");
    }

    #[test]
    fn test_average_per_day_ignores_leftover_seconds() {
        let average = average_per_day(&(Duration::minutes(61) + Duration::seconds(50)), 2);
        assert_eq!(average, Duration::minutes(30));
    }
}
