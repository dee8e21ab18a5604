use std::fmt;

use crate::errors::ClassifyError;

/// Highest floor count still classed as low-rise.
pub const LOW_RISE_MAX_FLOORS: i64 = 5;
/// Highest floor count still classed as mid-rise.
pub const MID_RISE_MAX_FLOORS: i64 = 16;

/// Height band of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    LowRise,
    MidRise,
    HighRise,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::LowRise => "low-rise",
            Category::MidRise => "mid-rise",
            Category::HighRise => "high-rise",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a building by its floor count.
///
/// | Floors  | Category  |
/// |---------|-----------|
/// | 1..=5   | low-rise  |
/// | 6..=16  | mid-rise  |
/// | >= 17   | high-rise |
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidRange`] for zero or negative counts.
pub fn classify(floor_count: i64) -> Result<Category, ClassifyError> {
    match floor_count {
        f if f <= 0 => Err(ClassifyError::InvalidRange(f)),
        f if f <= LOW_RISE_MAX_FLOORS => Ok(Category::LowRise),
        f if f <= MID_RISE_MAX_FLOORS => Ok(Category::MidRise),
        _ => Ok(Category::HighRise),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(1), Ok(Category::LowRise));
        assert_eq!(classify(5), Ok(Category::LowRise));
        assert_eq!(classify(6), Ok(Category::MidRise));
        assert_eq!(classify(16), Ok(Category::MidRise));
        assert_eq!(classify(17), Ok(Category::HighRise));
        assert_eq!(classify(i64::MAX), Ok(Category::HighRise));
    }

    #[test]
    fn test_classify_every_value_in_band() {
        for f in 1..=5 {
            assert_eq!(classify(f), Ok(Category::LowRise), "floor_count {f}");
        }
        for f in 6..=16 {
            assert_eq!(classify(f), Ok(Category::MidRise), "floor_count {f}");
        }
        for f in 17..=200 {
            assert_eq!(classify(f), Ok(Category::HighRise), "floor_count {f}");
        }
    }

    #[test]
    fn test_classify_rejects_non_positive() {
        assert_eq!(classify(0), Err(ClassifyError::InvalidRange(0)));
        assert_eq!(classify(-3), Err(ClassifyError::InvalidRange(-3)));
        assert_eq!(
            classify(i64::MIN),
            Err(ClassifyError::InvalidRange(i64::MIN))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::LowRise.to_string(), "low-rise");
        assert_eq!(Category::MidRise.to_string(), "mid-rise");
        assert_eq!(Category::HighRise.to_string(), "high-rise");
    }
}
