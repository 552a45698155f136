#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, FixedOffset};
    use timegrid::libs::formatter::{
        compute_duration, elapsed, format_duration, format_hours, format_instant, format_timeline, FormattedInterval,
        ONGOING,
    };
    use timegrid::libs::interval::{Interval, TimeEntry, TimeEntryRecord};

    fn at(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(&Duration::seconds(0)), "0s");
        assert_eq!(format_duration(&Duration::seconds(45)), "45s");
        assert_eq!(format_duration(&Duration::seconds(59)), "59s");
    }

    #[test]
    fn test_format_duration_minutes_round_to_nearest() {
        assert_eq!(format_duration(&Duration::seconds(60)), "1m");
        assert_eq!(format_duration(&Duration::seconds(89)), "1m");
        assert_eq!(format_duration(&Duration::seconds(90)), "2m");
        assert_eq!(format_duration(&Duration::minutes(59)), "59m");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::seconds(3600)), "1h");
        assert_eq!(format_duration(&Duration::seconds(3660)), "1h 1m");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(15))), "2h 15m");
        assert_eq!(format_duration(&(Duration::hours(23) + Duration::minutes(30))), "23h 30m");
    }

    #[test]
    fn test_format_duration_days_drop_minutes() {
        assert_eq!(format_duration(&Duration::seconds(90000)), "1d 1h");
        assert_eq!(format_duration(&Duration::days(1)), "1d");
        assert_eq!(format_duration(&(Duration::days(3) + Duration::hours(4) + Duration::minutes(59))), "3d 4h");
    }

    #[test]
    fn test_format_duration_uses_absolute_value() {
        assert_eq!(format_duration(&Duration::seconds(-45)), "45s");
        assert_eq!(format_duration(&Duration::seconds(-3660)), "1h 1m");
        assert_eq!(format_duration(&Duration::seconds(-90000)), "1d 1h");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(5400), "1h 30m");
        assert_eq!(format_hours(3660), "1h 1m");
        assert_eq!(format_hours(59), "0h 0m");
        assert_eq!(format_hours(90000), "25h 0m");
    }

    #[test]
    fn test_compute_duration_prefers_explicit_end() {
        let interval = Interval::closed(at("2024-06-03T09:00:00Z"), at("2024-06-03T10:30:00Z"));
        let next = Interval::new(at("2024-06-03T09:10:00Z"), 0);
        assert_eq!(compute_duration(&interval, Some(&next)), "1h 30m");
    }

    #[test]
    fn test_compute_duration_uses_next_start() {
        let interval = Interval::new(at("2024-06-03T09:00:00Z"), 0);
        let next = Interval::new(at("2024-06-03T09:45:00Z"), 0);
        assert_eq!(compute_duration(&interval, Some(&next)), "45m");
    }

    #[test]
    fn test_compute_duration_ongoing() {
        let interval = Interval::new(at("2024-06-03T09:00:00Z"), 0);
        assert_eq!(compute_duration(&interval, None), ONGOING);
        assert_eq!(elapsed(&interval, None), None);
    }

    #[test]
    fn test_compute_duration_negative_span_is_formatted() {
        let interval = Interval::closed(at("2024-06-03T09:00:00Z"), at("2024-06-03T08:58:30Z"));
        assert_eq!(elapsed(&interval, None), Some(Duration::seconds(-90)));
        assert_eq!(compute_duration(&interval, None), "2m");
    }

    #[test]
    fn test_format_instant_in_display_offset() {
        let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_instant(&at("2024-06-03T09:05:00Z"), &utc()), "Jun 3 09:05");
        assert_eq!(format_instant(&at("2024-06-03T09:05:00Z"), &berlin), "Jun 3 11:05");
    }

    #[test]
    fn test_format_timeline_rows() {
        let records = vec![
            TimeEntryRecord {
                id: 3,
                timestamp: "2024-06-03T10:15:00".to_string(),
                to_task: "review".to_string(),
                ..Default::default()
            },
            TimeEntryRecord {
                id: 1,
                timestamp: "2024-06-03T09:00:00".to_string(),
                to_task: "PROJ-1".to_string(),
                ..Default::default()
            },
            TimeEntryRecord {
                id: 2,
                timestamp: "2024-06-03T09:30:00".to_string(),
                end_time: Some("2024-06-03T10:00:00".to_string()),
                to_task: "email".to_string(),
                from_task: Some("PROJ-1".to_string()),
                ..Default::default()
            },
        ];
        let entries = TimeEntry::parse_batch(&records).unwrap();
        let rows = format_timeline(&entries, &utc());

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            FormattedInterval {
                id: 1,
                start: "Jun 3 09:00".to_string(),
                end: "-".to_string(),
                duration: "30m".to_string(),
                label: "PROJ-1".to_string(),
            }
        );
        assert_eq!(rows[1].end, "Jun 3 10:00");
        assert_eq!(rows[1].duration, "30m");
        assert_eq!(rows[2].label, "review");
        assert_eq!(rows[2].duration, ONGOING);
    }

    #[test]
    fn test_formatted_interval_serializes() {
        let row = FormattedInterval {
            id: 1,
            start: "Jun 3 09:00".to_string(),
            end: "-".to_string(),
            duration: "ongoing".to_string(),
            label: "email".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["duration"], "ongoing");
        assert_eq!(json["id"], 1);
    }
}
