#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use timegrid::libs::calendar::{bucket_to_grid, DayRecord, DayRecordRaw, GridWeeks, Metric, ViewMode};
    use timegrid::libs::error::InputError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(first: NaiveDate, values: &[f64]) -> Vec<DayRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| DayRecord::new(first + Duration::days(i as i64), *value))
            .collect()
    }

    fn raw(date: &str, value: f64) -> DayRecordRaw {
        DayRecordRaw {
            date: date.to_string(),
            value,
        }
    }

    #[test]
    fn test_single_sunday_fills_one_week() {
        let days = vec![DayRecord::new(date(2024, 6, 2), 3.0)];
        let cells = bucket_to_grid(&days, date(2024, 6, 10)).unwrap();

        assert_eq!(cells.len(), 7);
        assert!(cells[0].in_range);
        assert_eq!(cells[0].value, 3.0);
        assert_eq!(cells[0].day_of_month, 2);
        for cell in &cells[1..] {
            assert!(!cell.in_range);
            assert_eq!(cell.value, 0.0);
        }
    }

    #[test]
    fn test_empty_input_draws_nothing() {
        let cells = bucket_to_grid(&[], date(2024, 6, 2)).unwrap();
        assert!(cells.is_empty());
    }

    #[test]
    fn test_grid_starts_on_sunday_with_leading_padding() {
        // 2024-06-05 is a Wednesday: three padding cells before it.
        let days = series(date(2024, 6, 5), &[1.0, 2.0, 3.0]);
        let cells = bucket_to_grid(&days, date(2024, 6, 5)).unwrap();

        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0].date, date(2024, 6, 2));
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        assert!(cells[..3].iter().all(|cell| !cell.in_range));
        assert_eq!(cells[3].value, 1.0);
        assert_eq!(cells[5].value, 3.0);
        assert!(!cells[6].in_range);
    }

    #[test]
    fn test_month_spans_whole_weeks() {
        // June 2024 starts on a Saturday and ends on a Sunday: 6 rows.
        let days = series(date(2024, 6, 1), &[1.0; 30]);
        let cells = bucket_to_grid(&days, date(2024, 6, 15)).unwrap();

        assert_eq!(cells.len(), 42);
        assert_eq!(cells.weeks().count(), 6);
        assert_eq!(cells[0].date, date(2024, 5, 26));
        assert_eq!(cells.iter().filter(|cell| cell.in_range).count(), 30);
    }

    #[test]
    fn test_cell_count_is_multiple_of_seven() {
        for start_day in 1..=14 {
            for len in 1..=40usize {
                let days = series(date(2024, 2, start_day), &vec![0.5; len]);
                let cells = bucket_to_grid(&days, date(2024, 2, 1)).unwrap();
                assert_eq!(cells.len() % 7, 0, "start {} len {}", start_day, len);
                assert!(cells.len() >= len);
                assert!(cells.len() < len + 14);
            }
        }
    }

    #[test]
    fn test_every_day_maps_to_its_cell() {
        let days = series(date(2024, 3, 28), &[4.0, 0.0, 2.5, 7.0, 1.0, 9.0]);
        let cells = bucket_to_grid(&days, date(2024, 3, 30)).unwrap();

        for day in &days {
            let cell = cells.iter().find(|cell| cell.date == day.date).unwrap();
            assert!(cell.in_range);
            assert_eq!(cell.value, day.value);
        }
        // Zero-valued days are still in range.
        assert!(cells.iter().any(|cell| cell.in_range && cell.value == 0.0));
    }

    #[test]
    fn test_gaps_render_as_padding() {
        let days = vec![DayRecord::new(date(2024, 6, 3), 1.0), DayRecord::new(date(2024, 6, 6), 2.0)];
        let cells = bucket_to_grid(&days, date(2024, 6, 3)).unwrap();

        assert_eq!(cells.len(), 7);
        assert!(!cells[2].in_range);
        assert!(!cells[3].in_range);
        assert!(cells[4].in_range);
    }

    #[test]
    fn test_bucketing_is_idempotent() {
        let days = series(date(2024, 12, 28), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let first = bucket_to_grid(&days, date(2024, 12, 30)).unwrap();
        let second = bucket_to_grid(&days, date(2024, 12, 30)).unwrap();
        assert_eq!(first, second);

        let other_day = bucket_to_grid(&days, date(2025, 1, 1)).unwrap();
        assert_eq!(first.len(), other_day.len());
        for (a, b) in first.iter().zip(&other_day) {
            assert_eq!((a.date, a.value, a.in_range, a.day_of_month), (b.date, b.value, b.in_range, b.day_of_month));
        }
    }

    #[test]
    fn test_is_today_uses_caller_date() {
        let days = series(date(2024, 6, 2), &[1.0; 7]);
        let cells = bucket_to_grid(&days, date(2024, 6, 4)).unwrap();

        let today: Vec<_> = cells.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 6, 4));

        let outside = bucket_to_grid(&days, date(2025, 1, 1)).unwrap();
        assert!(outside.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn test_out_of_order_dates_are_rejected() {
        let days = vec![DayRecord::new(date(2024, 6, 3), 1.0), DayRecord::new(date(2024, 6, 2), 2.0)];
        let err = bucket_to_grid(&days, date(2024, 6, 3)).unwrap_err();
        assert!(matches!(err, InputError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn test_duplicate_dates_are_rejected() {
        let days = vec![DayRecord::new(date(2024, 6, 3), 1.0), DayRecord::new(date(2024, 6, 3), 2.0)];
        assert!(bucket_to_grid(&days, date(2024, 6, 3)).is_err());
    }

    #[test]
    fn test_parse_batch_rejects_invalid_dates() {
        let err = DayRecord::parse_batch(&[raw("2024-06-02", 1.0), raw("2024-02-30", 2.0)]).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidDate {
                index: 1,
                value: "2024-02-30".to_string()
            }
        );

        assert!(DayRecord::parse_batch(&[raw("06/02/2024", 1.0)]).is_err());
    }

    #[test]
    fn test_parse_batch_rejects_negative_values() {
        let err = DayRecord::parse_batch(&[raw("2024-06-02", -1.0)]).unwrap_err();
        assert!(matches!(err, InputError::InvalidValue { index: 0, .. }));
    }

    #[test]
    fn test_wire_records_accept_count_and_hours() {
        let counts: Vec<DayRecordRaw> = serde_json::from_str(r#"[{"date": "2024-06-02", "count": 3}]"#).unwrap();
        let hours: Vec<DayRecordRaw> = serde_json::from_str(r#"[{"date": "2024-06-02", "hours": 6.25}]"#).unwrap();

        assert_eq!(counts[0].value, 3.0);
        assert_eq!(hours[0].value, 6.25);
    }

    #[test]
    fn test_dates_are_calendar_days_not_instants() {
        // The JSON date is the bucketed day regardless of any timezone.
        let days = DayRecord::parse_batch(&[raw("2024-06-02", 1.0)]).unwrap();
        let cells = bucket_to_grid(&days, date(2024, 6, 2)).unwrap();
        assert_eq!(cells[0].date, date(2024, 6, 2));
        assert!(cells[0].is_today);
    }

    #[test]
    fn test_view_and_metric_labels() {
        assert_eq!(ViewMode::Month.to_string(), "month");
        assert_eq!(ViewMode::default(), ViewMode::Week);
        assert!(!Metric::Switches.is_hours());
        assert!(Metric::Activity.is_hours());
        assert_eq!(Metric::Switches.format_value(3.0), "3");
        assert_eq!(Metric::Hours.format_value(6.26), "6.3h");
    }
}
