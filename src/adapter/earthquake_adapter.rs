//! Binds earthquake records to list rows

use super::location::{distance_from, place_from};
use super::magnitude::{format_magnitude, MagnitudeBucket};
use super::row::ListItemView;
use crate::config::DisplayConfig;
use crate::earthquake::Earthquake;

/// Supplies one [`ListItemView`] per earthquake to the list pane.
#[derive(Debug, Clone)]
pub struct EarthquakeAdapter {
    earthquakes: Vec<Earthquake>,
    config: DisplayConfig,
}

impl EarthquakeAdapter {
    pub fn new(earthquakes: Vec<Earthquake>, config: DisplayConfig) -> Self {
        EarthquakeAdapter {
            earthquakes,
            config,
        }
    }

    pub fn count(&self) -> usize {
        self.earthquakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earthquakes.is_empty()
    }

    pub fn get_item(&self, position: usize) -> Option<&Earthquake> {
        self.earthquakes.get(position)
    }

    pub fn earthquakes(&self) -> &[Earthquake] {
        &self.earthquakes
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Fill a row for the earthquake at `position`.
    ///
    /// `convert_view` is a previously used container to recycle; a fresh one
    /// is created when it is `None`. Returns `None` past the end of the list.
    pub fn get_view(
        &self,
        position: usize,
        convert_view: Option<ListItemView>,
    ) -> Option<ListItemView> {
        let Some(earthquake) = self.get_item(position) else {
            log::debug!(
                "No earthquake at position {} (count {})",
                position,
                self.count()
            );
            return None;
        };
        let mut view = convert_view.unwrap_or_default();
        self.bind_view(earthquake, &mut view);
        Some(view)
    }

    /// Write the display values of `earthquake` into `view`.
    pub fn bind_view(&self, earthquake: &Earthquake, view: &mut ListItemView) {
        let magnitude = earthquake.magnitude();
        let bucket = MagnitudeBucket::from_magnitude(magnitude);
        log::trace!(
            "Binding magnitude {} ({}) at {:?}",
            magnitude,
            bucket,
            earthquake.location()
        );

        view.magnitude = format_magnitude(magnitude);
        view.magnitude_color = self.config.palette.color(bucket);

        let location = earthquake.location();
        view.location = place_from(location).to_string();
        view.distance = distance_from(location);

        let time = earthquake.time_in_milliseconds();
        view.date = self.config.time_zone.format_date(time, self.config.locale);
        view.time = self.config.time_zone.format_time(time, self.config.locale);
    }
}
