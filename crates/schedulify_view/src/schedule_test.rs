#[cfg(test)]
mod tests {
    use crate::schedule::{format_date_heading, render_schedule};
    use chrono::NaiveDate;
    use schedulify_client::Event;

    fn event(id: i64, name: &str, date: &str, time: &str, venue: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            venue: venue.to_string(),
        }
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn filters_to_the_selected_date_only() {
        let events = vec![
            event(1, "Board Sync", "2024-06-01", "10:00 - 11:00", "Room A"),
            event(2, "Standup", "2024-06-02", "09:00 - 09:15", "Room A"),
            event(3, "Retro", "2024-06-01", "15:00 - 16:00", "Room B"),
        ];

        let view = render_schedule(&events, june_first());

        let ids: Vec<i64> = view
            .sections
            .iter()
            .flat_map(|s| s.rows.iter().map(|r| r.id))
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn groups_by_venue_in_first_seen_order() {
        let events = vec![
            event(1, "Board Sync", "2024-06-01", "10:00 - 11:00", "Room A"),
            event(2, "Town Hall", "2024-06-01", "13:00 - 14:00", "Auditorium"),
            event(3, "Retro", "2024-06-01", "15:00 - 16:00", "Room A"),
        ];

        let view = render_schedule(&events, june_first());

        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].venue, "Room A");
        assert_eq!(view.sections[1].venue, "Auditorium");

        // Rows keep the input order within their venue.
        let room_a: Vec<&str> = view.sections[0]
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(room_a, vec!["Board Sync", "Retro"]);
    }

    #[test]
    fn rows_carry_name_time_and_delete_binding() {
        let events = vec![event(7, "Board Sync", "2024-06-01", "10:00 - 11:00", "Room A")];

        let view = render_schedule(&events, june_first());

        let row = &view.sections[0].rows[0];
        assert_eq!(row.id, 7);
        assert_eq!(row.name, "Board Sync");
        assert_eq!(row.time, "10:00 - 11:00");
    }

    #[test]
    fn empty_day_keeps_the_heading_and_no_sections() {
        let events = vec![event(1, "Standup", "2024-06-02", "09:00 - 09:15", "Room A")];

        let view = render_schedule(&events, june_first());

        assert!(view.is_empty());
        assert_eq!(view.heading, "Saturday, June 1, 2024");
    }

    #[test]
    fn rendering_is_idempotent() {
        let events = vec![
            event(1, "Board Sync", "2024-06-01", "10:00 - 11:00", "Room A"),
            event(2, "Retro", "2024-06-01", "15:00 - 16:00", "Room B"),
        ];

        let first = render_schedule(&events, june_first());
        let second = render_schedule(&events, june_first());

        assert_eq!(first, second);
    }

    #[test]
    fn heading_is_long_form_english() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 9).unwrap();
        assert_eq!(format_date_heading(date), "Tuesday, December 9, 2025");
    }
}
