//! Splitting of compound location descriptions
//!
//! USGS describes most events relative to a nearby town
//! ("80 Km N of San Francisco, CA"). The list shows the offset and the
//! place on separate lines, so the description is cut at the first
//! [`LOCATION_SEPARATOR`].

use super::constants::{LOCATION_SEPARATOR, NEAR_THE};

/// The two display halves of a location description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLocation {
    /// Offset from the place, separator included ("80 Km N of ")
    pub distance: String,
    /// Place name ("San Francisco, CA")
    pub place: String,
}

/// Split `location` at the first separator.
///
/// Without a separator the distance falls back to [`NEAR_THE`] and the place
/// is the whole description. An empty description yields two empty halves.
pub fn split_location(location: &str) -> SplitLocation {
    SplitLocation {
        distance: distance_from(location),
        place: place_from(location).to_string(),
    }
}

/// Distance prefix of `location`, see [`split_location`].
pub fn distance_from(location: &str) -> String {
    if location.is_empty() {
        return String::new();
    }
    match location.split_once(LOCATION_SEPARATOR) {
        Some((distance, _)) => format!("{}{}", distance, LOCATION_SEPARATOR),
        None => NEAR_THE.to_string(),
    }
}

/// Place name of `location`, see [`split_location`].
pub fn place_from(location: &str) -> &str {
    match location.split_once(LOCATION_SEPARATOR) {
        Some((_, place)) => place,
        None => location,
    }
}
