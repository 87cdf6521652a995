//! Earthquake records shown in the list.

/// A single earthquake event.
///
/// Fields are fixed at construction; the list that displays the records owns
/// them as a plain `Vec<Earthquake>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    magnitude: f64,
    location: String,
    time_in_milliseconds: i64,
    url: String,
}

impl Earthquake {
    /// Create a new earthquake record.
    ///
    /// `location` is either a compound description such as
    /// `"80 Km N of San Francisco, CA"` or a bare place name.
    /// `time_in_milliseconds` counts from the Unix epoch (UTC).
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        time_in_milliseconds: i64,
        url: impl Into<String>,
    ) -> Self {
        Earthquake {
            magnitude,
            location: location.into(),
            time_in_milliseconds,
            url: url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn time_in_milliseconds(&self) -> i64 {
        self.time_in_milliseconds
    }

    /// Link to the event's detail page
    pub fn url(&self) -> &str {
        &self.url
    }
}

const USGS_EVENT_PAGE: &str = "https://earthquake.usgs.gov/earthquakes/eventpage/";

/// The fixed list of earthquakes the binary displays.
pub fn sample_earthquakes() -> Vec<Earthquake> {
    [
        (7.2, "88km N of Yelizovo, Russia", 1_454_124_312_220, "us20004vvx"),
        (6.1, "94km SSE of Taron, Papua New Guinea", 1_453_777_820_750, "us20004uks"),
        (6.3, "50km NNE of Al Hoceima, Morocco", 1_453_695_722_730, "us10004gy9"),
        (7.1, "Pacific-Antarctic Ridge", 1_453_631_430_230, "us10004gqp"),
        (6.6, "272km ESE of Hotan, China", 1_453_399_617_650, "us10004g4l"),
        (4.3, "20km SW of Mammoth Lakes, California", 1_453_281_032_110, "nc72573651"),
        (5.4, "74km NW of Rumoi, Japan", 1_453_050_861_280, "us10004ey7"),
        (3.8, "12km WNW of Anza, California", 1_452_900_119_420, "ci37519592"),
        (2.3, "5km S of Volcano, Hawaii", 1_452_806_400_000, "hv61135961"),
        (1.4, "Near the coast of Central Alaska", 1_452_710_015_870, "ak12594581"),
        (8.3, "48km W of Illapel, Chile", 1_442_443_975_860, "us20003k7a"),
        (9.1, "near the east coast of Honshu, Japan", 1_299_822_384_120, "official20110311054624120_30"),
    ]
    .into_iter()
    .map(|(magnitude, location, time, id)| {
        Earthquake::new(magnitude, location, time, format!("{}{}", USGS_EVENT_PAGE, id))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructed_values() {
        let quake = Earthquake::new(6.754, "80 Km N of San Francisco, CA", 479_779_200_000, "http://x");

        assert_eq!(quake.magnitude(), 6.754);
        assert_eq!(quake.location(), "80 Km N of San Francisco, CA");
        assert_eq!(quake.time_in_milliseconds(), 479_779_200_000);
        assert_eq!(quake.url(), "http://x");
    }

    #[test]
    fn test_sample_earthquakes_have_event_links() {
        let quakes = sample_earthquakes();

        assert!(!quakes.is_empty());
        for quake in &quakes {
            assert!(!quake.location().is_empty());
            assert!(quake.url().starts_with(USGS_EVENT_PAGE));
        }
    }
}
