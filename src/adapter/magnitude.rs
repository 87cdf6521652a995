//! Magnitude text and severity buckets

use std::fmt;

/// Format a magnitude with exactly one decimal digit ("3.2").
///
/// Rounds the exact binary value of `magnitude` to the nearest tenth; exact
/// ties such as `0.25` go to the even digit.
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

/// Severity class used to pick the magnitude circle color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MagnitudeBucket {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    TenPlus,
}

impl MagnitudeBucket {
    /// All buckets in ascending severity
    pub const ALL: [MagnitudeBucket; 10] = [
        MagnitudeBucket::One,
        MagnitudeBucket::Two,
        MagnitudeBucket::Three,
        MagnitudeBucket::Four,
        MagnitudeBucket::Five,
        MagnitudeBucket::Six,
        MagnitudeBucket::Seven,
        MagnitudeBucket::Eight,
        MagnitudeBucket::Nine,
        MagnitudeBucket::TenPlus,
    ];

    /// Bucket for `magnitude`, truncated toward zero (not rounded).
    ///
    /// Everything below 2 (negatives and NaN included) is bucket 1,
    /// everything from 10 upwards is bucket 10+.
    pub fn from_magnitude(magnitude: f64) -> Self {
        // `as` saturates and maps NaN to 0
        match magnitude as i64 {
            i64::MIN..=1 => MagnitudeBucket::One,
            2 => MagnitudeBucket::Two,
            3 => MagnitudeBucket::Three,
            4 => MagnitudeBucket::Four,
            5 => MagnitudeBucket::Five,
            6 => MagnitudeBucket::Six,
            7 => MagnitudeBucket::Seven,
            8 => MagnitudeBucket::Eight,
            9 => MagnitudeBucket::Nine,
            _ => MagnitudeBucket::TenPlus,
        }
    }

    /// Position in [`MagnitudeBucket::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MagnitudeBucket::One => "1",
            MagnitudeBucket::Two => "2",
            MagnitudeBucket::Three => "3",
            MagnitudeBucket::Four => "4",
            MagnitudeBucket::Five => "5",
            MagnitudeBucket::Six => "6",
            MagnitudeBucket::Seven => "7",
            MagnitudeBucket::Eight => "8",
            MagnitudeBucket::Nine => "9",
            MagnitudeBucket::TenPlus => "10+",
        }
    }
}

impl fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_magnitude_one_decimal() {
        assert_eq!(format_magnitude(6.754321), "6.8");
        assert_eq!(format_magnitude(5.0), "5.0");
        assert_eq!(format_magnitude(6.849), "6.8");
        assert_eq!(format_magnitude(0.0), "0.0");
        assert_eq!(format_magnitude(10.96), "11.0");
    }

    #[test]
    fn test_format_magnitude_uses_exact_binary_value() {
        // 0.15 is stored as 0.1499999..., so it rounds down
        assert_eq!(format_magnitude(0.15), "0.1");
        // 0.25 is an exact tie and goes to the even digit
        assert_eq!(format_magnitude(0.25), "0.2");
    }

    #[test]
    fn test_bucket_truncates_toward_zero() {
        assert_eq!(MagnitudeBucket::from_magnitude(1.9).label(), "1");
        assert_eq!(MagnitudeBucket::from_magnitude(2.0).label(), "2");
        assert_eq!(MagnitudeBucket::from_magnitude(6.754).label(), "6");
        assert_eq!(MagnitudeBucket::from_magnitude(9.99).label(), "9");
        assert_eq!(MagnitudeBucket::from_magnitude(10.0).label(), "10+");
    }

    #[test]
    fn test_bucket_out_of_table_values() {
        assert_eq!(MagnitudeBucket::from_magnitude(-3.0), MagnitudeBucket::One);
        assert_eq!(MagnitudeBucket::from_magnitude(-0.5), MagnitudeBucket::One);
        assert_eq!(MagnitudeBucket::from_magnitude(f64::NAN), MagnitudeBucket::One);
        assert_eq!(MagnitudeBucket::from_magnitude(42.0), MagnitudeBucket::TenPlus);
        assert_eq!(
            MagnitudeBucket::from_magnitude(f64::INFINITY),
            MagnitudeBucket::TenPlus
        );
    }

    #[test]
    fn test_bucket_index_matches_all() {
        for (i, bucket) in MagnitudeBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }
}
