// Constants for row formatting

use chrono::Locale;

/// Separates the distance prefix from the place name in a compound location,
/// e.g. "80 Km N of San Francisco, CA"
pub const LOCATION_SEPARATOR: &str = " of ";

/// Distance text shown when the location has no separator
pub const NEAR_THE: &str = "Near the";

/// Calendar date pattern, e.g. "Mar 3, 1984"
pub const DATE_PATTERN: &str = "%b %-d, %Y";

/// Clock time pattern, e.g. "4:30 PM"
pub const TIME_PATTERN: &str = "%-I:%M %p";

pub const DEFAULT_LOCALE: Locale = Locale::en_US;
