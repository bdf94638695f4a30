#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::appointment::Appointment;
    use super::super::filter::{filter_appointments, matches};

    fn appointment(id: i64, first: &str, last: &str, mobile: &str, date: &str) -> Appointment {
        Appointment {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            mobile_number: mobile.to_string(),
            email: None,
            service: vec!["Cut".to_string()],
            date: date.to_string(),
            time: "14:30:00".to_string(),
        }
    }

    fn collection() -> Vec<Appointment> {
        vec![
            appointment(1, "Ann", "Lee", "5551234", "2024-05-01"),
            appointment(2, "John", "Park", "5559876", "2024-05-02"),
            appointment(3, "Mia", "Stone", "0441111", "2024-05-01"),
        ]
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let all = collection();
        assert_eq!(filter_appointments(&all, "", ""), all);
    }

    #[test]
    fn test_filtering_never_adds_records() {
        let all = collection();
        for term in ["", "ann", "555", "xyz"] {
            for date in ["", "2024-05-01"] {
                let filtered = filter_appointments(&all, term, date);
                assert!(filtered.len() <= all.len());
                assert!(filtered.iter().all(|a| all.contains(a)));
            }
        }
    }

    #[rstest]
    #[case("JOHN", true)]
    #[case("john", true)]
    #[case("ark", true)] // last-name substring
    #[case("xyz", false)]
    fn test_name_match_is_case_insensitive(#[case] term: &str, #[case] expected: bool) {
        let record = appointment(2, "John", "Park", "5559876", "2024-05-02");
        assert_eq!(matches(&record, term, ""), expected);
    }

    #[rstest]
    #[case("555", true)]
    #[case("1234", true)]
    #[case("ABC", false)] // lowered term never hits uppercase mobile text
    fn test_mobile_match_is_literal(#[case] term: &str, #[case] expected: bool) {
        let record = appointment(1, "Ann", "Lee", "555-1234ABC", "2024-05-01");
        // Names chosen so only the mobile field can match these terms.
        assert_eq!(matches(&record, term, ""), expected);
    }

    #[test]
    fn test_date_match_compares_formatted_strings() {
        // Distinct raw values that format to the same locale date all match.
        let midnight = appointment(1, "Ann", "Lee", "5551234", "2024-05-01");
        let morning = appointment(2, "Bo", "Kim", "5552222", "2024-05-01T08:30:00");

        assert!(matches(&midnight, "", "2024-05-01"));
        assert!(matches(&morning, "", "2024-05-01"));
        assert!(!matches(&midnight, "", "2024-05-02"));
    }

    #[test]
    fn test_empty_date_passes_every_record() {
        let all = collection();
        assert_eq!(filter_appointments(&all, "", "").len(), all.len());
    }

    #[test]
    fn test_both_conditions_must_hold() {
        let all = collection();
        // "ann" matches record 1 by name, but its date is 2024-05-01.
        let filtered = filter_appointments(&all, "ann", "2024-05-02");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_clearing_search_leaves_date_filter_governing() {
        let all = collection();
        let narrowed = filter_appointments(&all, "ann", "2024-05-01");
        assert_eq!(narrowed.len(), 1);

        let cleared = filter_appointments(&all, "", "2024-05-01");
        assert_eq!(cleared.len(), 2);
        assert!(cleared.iter().all(|a| a.date == "2024-05-01"));
    }

    #[test]
    fn test_clearing_date_leaves_search_governing() {
        let all = collection();
        let cleared = filter_appointments(&all, "ann", "");
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].id, 1);
    }

    #[test]
    fn test_result_preserves_fetch_order() {
        let all = collection();
        let filtered = filter_appointments(&all, "", "2024-05-01");
        let ids: Vec<i64> = filtered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
