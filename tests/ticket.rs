#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, FixedOffset};
    use timegrid::libs::interval::{Interval, RemoteWorklog};
    use timegrid::libs::matcher::IntervalMatcher;
    use timegrid::libs::ticket::{group_by_ticket, sync_candidates, sync_comment, ticket_from_tags, SyncEntry, SyncResponse, TicketData, TicketSummary};

    fn t0() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-03T09:00:00Z").unwrap()
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_ticket_from_tags() {
        assert_eq!(ticket_from_tags(&tags(&["dev", "PROJ-42"])), Some("PROJ-42".to_string()));
        assert_eq!(ticket_from_tags(&tags(&["Proj-42", "PROJ42", "-1"])), None);
    }

    #[test]
    fn test_summary_totals() {
        let intervals = vec![
            Interval::new(t0(), 3600),
            Interval::closed(t0() + Duration::hours(2), t0() + Duration::hours(3) + Duration::minutes(30)),
        ];
        let worklogs = vec![RemoteWorklog::new(t0(), 3600)];
        let summary = TicketSummary::from_intervals("PROJ-1", &intervals, &worklogs)
            .with_summary(Some("Login page".to_string()));

        assert_eq!(summary.interval_count, 2);
        assert_eq!(summary.total_seconds, 9000);
        assert_eq!(summary.total_formatted, "2h 30m");
        assert_eq!(summary.existing_seconds, 3600);
        assert_eq!(summary.existing_formatted, "1h 0m");
        assert_eq!(summary.earliest_start, Some(t0()));
        assert_eq!(summary.latest_end, Some(t0() + Duration::hours(3) + Duration::minutes(30)));
        assert_eq!(summary.summary.as_deref(), Some("Login page"));
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = TicketSummary::from_intervals("PROJ-1", &[], &[]).with_summary(Some(" ".to_string()));
        assert_eq!(summary.interval_count, 0);
        assert_eq!(summary.total_formatted, "0h 0m");
        assert_eq!(summary.earliest_start, None);
        assert_eq!(summary.summary, None);
    }

    #[test]
    fn test_group_by_ticket_is_ordered_and_skips_untagged() {
        let intervals = vec![
            Interval::new(t0(), 60).with_ticket("ZED-1"),
            Interval::new(t0(), 60),
            Interval::new(t0(), 60).with_ticket("ABC-2"),
            Interval::new(t0(), 120).with_ticket("ZED-1"),
        ];
        let groups = group_by_ticket(&intervals);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["ABC-2", "ZED-1"]);
        assert_eq!(groups["ZED-1"].len(), 2);
        assert_eq!(groups["ZED-1"][1].duration_seconds, 120);
    }

    #[test]
    fn test_sync_candidates() {
        let intervals = vec![
            Interval::new(t0(), 3600).with_note("already logged"),
            Interval::new(t0() + Duration::hours(2), 30).with_note("too short"),
            Interval::new(t0() + Duration::hours(4), 1800).with_note("close"),
            Interval::new(t0() + Duration::hours(6), 900).with_note("new"),
        ];
        let worklogs = vec![
            RemoteWorklog::new(t0() + Duration::minutes(1), 3600),
            RemoteWorklog::new(t0() + Duration::hours(4) + Duration::minutes(8), 1800),
        ];
        let candidates = sync_candidates(&intervals, &worklogs, &IntervalMatcher::default());

        let notes: Vec<_> = candidates.iter().map(|i| i.note.as_deref().unwrap()).collect();
        assert_eq!(notes, vec!["close", "new"]);
    }

    #[test]
    fn test_sync_comment() {
        assert_eq!(sync_comment(Some("Fix login")), "Fix login. (Synced from Timewarrior)");
        assert_eq!(sync_comment(Some("Fix login.")), "Fix login. (Synced from Timewarrior)");
        assert_eq!(sync_comment(None), "Time tracked via Timewarrior sync");
    }

    #[test]
    fn test_ticket_payload_defaults() {
        let data: TicketData = serde_json::from_str(r#"{"ticket": "PROJ-1"}"#).unwrap();
        assert_eq!(data.ticket, "PROJ-1");
        assert!(data.summary.is_none());
        assert!(data.intervals.is_empty());
        assert!(data.existing_worklogs.is_empty());
    }

    #[test]
    fn test_sync_entry_prefers_interval_ticket() {
        let tagged = Interval::new(t0(), 900).with_ticket("OTHER-9").with_note("Review");
        let entry = SyncEntry::new("PROJ-1", &tagged);
        assert_eq!(entry.ticket, "OTHER-9");
        assert_eq!(entry.duration_formatted, "0h 15m");
        assert_eq!(entry.comment, "Review. (Synced from Timewarrior)");

        let untagged = SyncEntry::new("PROJ-1", &Interval::new(t0(), 900));
        assert_eq!(untagged.ticket, "PROJ-1");
        assert_eq!(untagged.note, None);
        assert_eq!(untagged.comment, "Time tracked via Timewarrior sync");
    }

    #[test]
    fn test_sync_response_without_results() {
        let response: SyncResponse = serde_json::from_str(r#"{"summary": {"success": 2, "failed": 0}}"#).unwrap();
        assert_eq!(response.summary.success, 2);
        assert!(response.results.is_empty());
    }
}
