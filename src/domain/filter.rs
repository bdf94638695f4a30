use super::appointment::{locale_date, Appointment};

/// True when the record satisfies both active filters. An empty search
/// term matches every record; an empty date means no date filter.
pub fn matches(appointment: &Appointment, search_term: &str, selected_date: &str) -> bool {
    let term = search_term.to_lowercase();

    // Names compare case-insensitively. The mobile number is matched
    // against the lowered term as-is, so only numeric substrings can
    // hit it; uppercase text never matches via the mobile field.
    let text_match = appointment.first_name.to_lowercase().contains(&term)
        || appointment.last_name.to_lowercase().contains(&term)
        || appointment.mobile_number.contains(&term);

    // Equality is on formatted display strings, not raw values.
    let date_match =
        selected_date.is_empty() || locale_date(&appointment.date) == locale_date(selected_date);

    text_match && date_match
}

/// Applies the predicate across the fetched collection, preserving fetch
/// order. Recomputed on every input change; no memoization.
pub fn filter_appointments(
    appointments: &[Appointment],
    search_term: &str,
    selected_date: &str,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| matches(appointment, search_term, selected_date))
        .cloned()
        .collect()
}
