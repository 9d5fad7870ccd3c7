use crate::models::booking::BookingModel;

/// Case-insensitive substring over id, pickup, dropoff, driver id and client id
pub fn booking_matches_search(booking: &BookingModel, term: &str) -> bool {
    let needle = term.to_lowercase();
    let ids = [Some(booking.id), booking.driver_id, booking.client_id];
    ids.into_iter()
        .flatten()
        .any(|id| id.to_string().contains(&needle))
        || [
            booking.pickup_location.as_deref(),
            booking.dropoff_location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Bookings matching the search term (blank matches all) and the exact status
pub fn filter_bookings<'a>(
    bookings: &'a [BookingModel],
    search: Option<&str>,
    status: Option<&str>,
) -> Vec<&'a BookingModel> {
    let search = search.filter(|term| !term.trim().is_empty());
    bookings
        .iter()
        .filter(|booking| search.map_or(true, |term| booking_matches_search(booking, term)))
        .filter(|booking| status.map_or(true, |status| booking.status.as_str() == status))
        .collect()
}
