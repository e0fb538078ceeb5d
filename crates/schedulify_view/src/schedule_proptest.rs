#[cfg(test)]
mod tests {
    use crate::schedule::render_schedule;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use schedulify_client::Event;

    const DATES: [&str; 3] = ["2024-06-01", "2024-06-02", "2024-06-03"];
    const VENUES: [&str; 4] = ["Room A", "Room B", "Auditorium", "Lobby"];

    // Strategy: an arbitrary event list over a small pool of dates and
    // venues, with ids assigned by position so they are unique.
    fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
        proptest::collection::vec((0..DATES.len(), 0..VENUES.len()), 0..32).prop_map(|picks| {
            picks
                .into_iter()
                .enumerate()
                .map(|(i, (date_idx, venue_idx))| Event {
                    id: i as i64,
                    name: format!("Event {i}"),
                    date: DATES[date_idx].to_string(),
                    time: "10:00 - 11:00".to_string(),
                    venue: VENUES[venue_idx].to_string(),
                })
                .collect()
        })
    }

    proptest! {
        // Every event of the selected date appears exactly once; no event
        // of another date leaks in.
        #[test]
        fn partitions_exactly_the_selected_date(events in events_strategy()) {
            let selected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let view = render_schedule(&events, selected);

            let mut rendered_ids: Vec<i64> = view
                .sections
                .iter()
                .flat_map(|s| s.rows.iter().map(|r| r.id))
                .collect();
            let mut expected_ids: Vec<i64> = events
                .iter()
                .filter(|e| e.date == "2024-06-01")
                .map(|e| e.id)
                .collect();

            rendered_ids.sort_unstable();
            expected_ids.sort_unstable();
            prop_assert_eq!(rendered_ids, expected_ids);
        }

        // Within a venue, rows keep the order the service returned.
        #[test]
        fn venue_sections_preserve_input_order(events in events_strategy()) {
            let selected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let view = render_schedule(&events, selected);

            for section in &view.sections {
                let expected: Vec<i64> = events
                    .iter()
                    .filter(|e| e.date == "2024-06-01" && e.venue == section.venue)
                    .map(|e| e.id)
                    .collect();
                let actual: Vec<i64> = section.rows.iter().map(|r| r.id).collect();
                prop_assert_eq!(actual, expected);
            }
        }

        // No venue appears in two sections.
        #[test]
        fn venues_are_not_split(events in events_strategy()) {
            let selected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let view = render_schedule(&events, selected);

            let mut venues: Vec<&str> = view.sections.iter().map(|s| s.venue.as_str()).collect();
            venues.sort_unstable();
            venues.dedup();
            prop_assert_eq!(venues.len(), view.sections.len());
        }
    }
}
