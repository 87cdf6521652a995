//! Turns [`Earthquake`](crate::earthquake::Earthquake) records into list rows.
//!
//! - [`location`]: splits "80 Km N of San Francisco, CA" into distance and place
//! - [`magnitude`]: one-decimal magnitude text and severity buckets
//! - [`datetime`]: date and clock text in an explicit time zone and locale
//! - [`row`]: the recyclable [`ListItemView`] container
//! - [`EarthquakeAdapter`]: binds a record to a row using all of the above

pub mod constants;
pub mod datetime;
pub mod location;
pub mod magnitude;
pub mod row;

mod earthquake_adapter;

pub use datetime::DisplayZone;
pub use earthquake_adapter::EarthquakeAdapter;
pub use location::{split_location, SplitLocation};
pub use magnitude::{format_magnitude, MagnitudeBucket};
pub use row::ListItemView;
